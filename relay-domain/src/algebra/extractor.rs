use serde_json::Value;

pub type ExtractionRule = fn(&Value) -> Option<String>;

/// Checked in order inside the `outputs` object when it is not a plain string.
const OUTPUT_KEYS: [&str; 3] = ["result", "output", "text"];

/// The extraction rules in priority order. Each rule either yields the result
/// text or passes control to the next one; only non-empty strings qualify.
pub const EXTRACTION_RULES: [ExtractionRule; 4] = [
    outputs_as_string,
    outputs_known_key,
    data_text,
    body_as_string,
];

/// Locates the result text inside an upstream workflow response, applying the
/// rules in order until one succeeds. `None` means the extraction was
/// inconclusive and the caller should fall back to the raw payload.
pub fn extract_text(data: &Value) -> Option<String> {
    EXTRACTION_RULES.iter().find_map(|rule| rule(data))
}

fn outputs_as_string(data: &Value) -> Option<String> {
    non_empty_string(data.get("data")?.get("outputs")?)
}

fn outputs_known_key(data: &Value) -> Option<String> {
    let outputs = data.get("data")?.get("outputs")?.as_object()?;

    OUTPUT_KEYS
        .iter()
        .find_map(|key| outputs.get(*key).and_then(non_empty_string))
}

fn data_text(data: &Value) -> Option<String> {
    non_empty_string(data.get("data")?.get("text")?)
}

fn body_as_string(data: &Value) -> Option<String> {
    non_empty_string(data)
}

fn non_empty_string(value: &Value) -> Option<String> {
    value
        .as_str()
        .filter(|text| !text.is_empty())
        .map(str::to_owned)
}
