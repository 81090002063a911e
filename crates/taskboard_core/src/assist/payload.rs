//! Normalization of assistant payloads.
//!
//! Assistant answers arrive as JSON values whose interesting part is often a
//! string that itself contains JSON, sometimes wrapped in a Markdown code
//! fence. Everything here is pure and side-effect free.

use crate::assist::{AssistError, AssistResult, DayPlan, PlanStep, SubtaskDraft};
use crate::model::due_date::DATE_FORMAT;
use crate::model::status::Status;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

static CODE_FENCE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^\s*```[A-Za-z0-9_-]*\s*\n?(.*?)\s*```\s*$").expect("valid fence regex")
});
static ISO_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date regex"));
static LIST_MARKER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(?:[-*\x{2022}]+|\d+[.)])\s*").expect("valid list marker regex"));

/// Removes a surrounding Markdown code fence, if any.
pub fn strip_code_fence(text: &str) -> &str {
    match CODE_FENCE_RE.captures(text).and_then(|caps| caps.get(1)) {
        Some(inner) => inner.as_str(),
        None => text.trim(),
    }
}

/// Extracts starter steps from a `{"steps": [...]}` answer.
///
/// A single string is accepted too; it is split into lines and list markers
/// are dropped.
pub fn parse_steps(payload: &Value) -> AssistResult<Vec<String>> {
    reject_error(payload)?;
    let steps = match payload.get("steps").unwrap_or(payload) {
        Value::Array(items) => string_items(items),
        Value::String(text) => split_steps(text),
        _ => {
            return Err(AssistError::MalformedPayload(
                "answer has no `steps` list".to_string(),
            ))
        }
    };

    if steps.is_empty() {
        return Err(AssistError::MalformedPayload(
            "answer contained no steps".to_string(),
        ));
    }
    Ok(steps)
}

fn string_items(items: &[Value]) -> Vec<String> {
    items
        .iter()
        .filter_map(Value::as_str)
        .map(|step| step.trim().to_string())
        .filter(|step| !step.is_empty())
        .collect()
}

fn split_steps(text: &str) -> Vec<String> {
    let text = strip_code_fence(text);
    if let Ok(Value::Array(items)) = serde_json::from_str::<Value>(text) {
        return string_items(&items);
    }
    text.lines()
        .map(|line| LIST_MARKER_RE.replace(line, "").trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}

/// Extracts dated subtasks from a project plan answer.
///
/// The draft array may be the answer itself, a `subtasks` field, or a
/// `response` field holding either of those or a string with the JSON.
/// Every element must carry non-blank `text` and a `YYYY-MM-DD` `dueDate`;
/// one bad element rejects the whole plan.
pub fn parse_project_plan(payload: &Value) -> AssistResult<Vec<SubtaskDraft>> {
    reject_error(payload)?;
    let items = plan_items(payload.get("response").unwrap_or(payload))?;

    if items.is_empty() {
        return Err(AssistError::InvalidSubtasks("plan is empty".to_string()));
    }
    items
        .iter()
        .enumerate()
        .map(|(index, item)| draft_from(index, item))
        .collect()
}

fn plan_items(value: &Value) -> AssistResult<Vec<Value>> {
    match value {
        Value::Array(items) => Ok(unwrap_nested(items.clone())),
        Value::Object(fields) => match fields.get("subtasks") {
            Some(Value::Array(items)) => Ok(unwrap_nested(items.clone())),
            _ => Err(AssistError::MalformedPayload(
                "answer has no subtask list".to_string(),
            )),
        },
        Value::String(text) => match serde_json::from_str::<Value>(strip_code_fence(text)) {
            Ok(parsed @ Value::Object(_)) => plan_items(&parsed),
            _ => json_array_in(text).map(unwrap_nested),
        },
        _ => Err(AssistError::MalformedPayload(
            "answer has no subtask list".to_string(),
        )),
    }
}

/// `[[...]]` is read as `[...]`.
fn unwrap_nested(mut items: Vec<Value>) -> Vec<Value> {
    if items.len() == 1 && items[0].is_array() {
        if let Some(Value::Array(inner)) = items.pop() {
            return inner;
        }
    }
    items
}

fn json_array_in(text: &str) -> AssistResult<Vec<Value>> {
    let text = strip_code_fence(text);
    let slice = match (text.find('['), text.rfind(']')) {
        (Some(start), Some(end)) if start < end => &text[start..=end],
        _ => {
            return Err(AssistError::MalformedPayload(
                "no JSON array in answer".to_string(),
            ))
        }
    };
    match serde_json::from_str::<Value>(slice) {
        Ok(Value::Array(items)) => Ok(items),
        Ok(_) => Err(AssistError::MalformedPayload(
            "answer is not a JSON array".to_string(),
        )),
        Err(err) => Err(AssistError::MalformedPayload(format!(
            "answer array is not valid JSON: {err}"
        ))),
    }
}

fn draft_from(index: usize, item: &Value) -> AssistResult<SubtaskDraft> {
    let invalid = |reason: &str| AssistError::InvalidSubtasks(format!("item {index}: {reason}"));

    let text = item
        .get("text")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .ok_or_else(|| invalid("missing text"))?;
    let raw_date = item
        .get("dueDate")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|date| ISO_DATE_RE.is_match(date))
        .ok_or_else(|| invalid("missing or malformed dueDate"))?;
    let due_date =
        NaiveDate::parse_from_str(raw_date, DATE_FORMAT).map_err(|_| invalid("impossible dueDate"))?;
    let status = item
        .get("status")
        .and_then(Value::as_str)
        .and_then(|raw| Status::parse(raw).ok())
        .unwrap_or(Status::Todo);

    Ok(SubtaskDraft {
        text: text.to_string(),
        due_date,
        status,
    })
}

/// Extracts a day plan.
///
/// A `response` string that is not a JSON object is kept as narrative text.
pub fn parse_day_plan(payload: &Value) -> AssistResult<DayPlan> {
    reject_error(payload)?;
    let plan = match payload.get("response") {
        Some(Value::Object(fields)) => day_plan_from(fields),
        Some(Value::String(text)) => {
            let text = strip_code_fence(text);
            match serde_json::from_str::<Value>(text) {
                Ok(Value::Object(fields)) => day_plan_from(&fields),
                _ => DayPlan {
                    narrative: Some(text.to_string()).filter(|text| !text.is_empty()),
                    ..DayPlan::default()
                },
            }
        }
        _ => {
            return Err(AssistError::MalformedPayload(
                "answer has no `response` field".to_string(),
            ))
        }
    };

    if plan.is_empty() {
        return Err(AssistError::MalformedPayload(
            "day plan is empty".to_string(),
        ));
    }
    Ok(plan)
}

fn day_plan_from(fields: &Map<String, Value>) -> DayPlan {
    let plan = match fields.get("plan") {
        Some(Value::Array(steps)) => steps.iter().filter_map(plan_step_from).collect(),
        _ => Vec::new(),
    };
    let overdue = match fields.get("overdue") {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    };

    DayPlan {
        wellness: text_field(fields, "wellness"),
        plan,
        overdue,
        advice: text_field(fields, "advice"),
        narrative: None,
    }
}

fn plan_step_from(value: &Value) -> Option<PlanStep> {
    match value {
        Value::String(task) if !task.trim().is_empty() => Some(PlanStep {
            task: task.trim().to_string(),
            ..PlanStep::default()
        }),
        Value::Object(fields) => Some(PlanStep {
            task: text_field(fields, "task")?,
            project: text_field(fields, "project"),
            reason: text_field(fields, "reason"),
        }),
        _ => None,
    }
}

fn text_field(fields: &Map<String, Value>, key: &str) -> Option<String> {
    fields
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

fn reject_error(payload: &Value) -> AssistResult<()> {
    match payload.get("error") {
        Some(Value::String(message)) => Err(AssistError::Rejected(message.clone())),
        Some(Value::Null) | None => Ok(()),
        Some(other) => Err(AssistError::Rejected(other.to_string())),
    }
}
