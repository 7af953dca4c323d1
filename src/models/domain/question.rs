use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const DEFAULT_DIFFICULTY: &str = "medium";

/// A single multiple-choice question as returned to clients.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRecord {
    pub id: u64,
    pub question: String,
    pub options: Vec<String>,
    /// Indices into `options`.
    pub correct_answers: Vec<usize>,
    pub multiple_choice: bool,
    /// Conventionally `easy`, `medium` or `hard`, but not enforced.
    pub difficulty: String,
    pub explanation: String,
    pub category: String,
}

impl QuestionRecord {
    /// Builds a record from one element of the provider's array. Never fails:
    /// every field that is missing or has the wrong shape gets its default.
    pub fn normalize(raw: &Value, index: usize, starting_id: u64, topic: &str) -> Self {
        let empty = Map::new();
        let fields = raw.as_object().unwrap_or(&empty);

        Self {
            id: fields
                .get("id")
                .and_then(positive_integer)
                .unwrap_or_else(|| starting_id.saturating_add(index as u64)),
            question: string_field(fields, "question").unwrap_or_default(),
            options: fields
                .get("options")
                .and_then(Value::as_array)
                .map(|options| options.iter().filter_map(option_text).collect())
                .unwrap_or_default(),
            correct_answers: fields
                .get("correctAnswers")
                .and_then(Value::as_array)
                .map(|answers| answer_indices(answers))
                .unwrap_or_else(|| vec![0]),
            multiple_choice: fields
                .get("multipleChoice")
                .and_then(Value::as_bool)
                .unwrap_or(false),
            difficulty: non_empty_string_field(fields, "difficulty")
                .unwrap_or_else(|| DEFAULT_DIFFICULTY.to_string()),
            explanation: string_field(fields, "explanation").unwrap_or_default(),
            category: non_empty_string_field(fields, "category")
                .unwrap_or_else(|| topic.to_string()),
        }
    }

    /// Stand-in used when the provider's reply cannot be decoded at all.
    pub fn fallback(starting_id: u64, topic: &str) -> Self {
        Self {
            id: starting_id,
            question: format!("What is a key concept in {topic}?"),
            options: vec![
                "Option A".to_string(),
                "Option B".to_string(),
                "Option C".to_string(),
                "Option D".to_string(),
            ],
            correct_answers: vec![0],
            multiple_choice: false,
            difficulty: DEFAULT_DIFFICULTY.to_string(),
            explanation: "This is a fallback question due to a parsing error.".to_string(),
            category: topic.to_string(),
        }
    }
}

fn positive_integer(value: &Value) -> Option<u64> {
    let id = match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    id.filter(|id| *id > 0)
}

fn string_field(fields: &Map<String, Value>, key: &str) -> Option<String> {
    fields.get(key).and_then(Value::as_str).map(str::to_string)
}

fn non_empty_string_field(fields: &Map<String, Value>, key: &str) -> Option<String> {
    string_field(fields, key).filter(|s| !s.is_empty())
}

fn option_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

// Set semantics, first occurrence wins.
fn answer_indices(values: &[Value]) -> Vec<usize> {
    let mut indices = Vec::with_capacity(values.len());
    for index in values.iter().filter_map(Value::as_u64) {
        let index = index as usize;
        if !indices.contains(&index) {
            indices.push(index);
        }
    }
    indices
}
