const THINK_OPEN: &str = "<think>";
const THINK_CLOSE: &str = "</think>";

/// Strips every `<think>...</think>` span from raw model output and trims
/// the result. The deepseek-r1 family emits its internal deliberation
/// inside these markers and none of it may reach the end user. Spans
/// match across line boundaries; an open marker with no closing marker is
/// not a span and stays in place.
pub fn strip_reasoning(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(start) = rest.find(THINK_OPEN) {
        match rest[start + THINK_OPEN.len()..].find(THINK_CLOSE) {
            Some(end) => {
                out.push_str(&rest[..start]);
                rest = &rest[start + THINK_OPEN.len() + end + THINK_CLOSE.len()..];
            }
            None => break,
        }
    }
    out.push_str(rest);
    out.trim().to_string()
}
