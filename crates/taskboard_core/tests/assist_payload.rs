use chrono::NaiveDate;
use serde_json::json;
use taskboard_core::assist::payload::{parse_day_plan, parse_project_plan, parse_steps};
use taskboard_core::{AssistError, PlanStep, Status};

#[test]
fn steps_accept_object_and_bare_array() {
    let steps = parse_steps(&json!({ "steps": ["  open laptop ", "", "write one line"] })).unwrap();
    assert_eq!(steps, vec!["open laptop", "write one line"]);

    let steps = parse_steps(&json!(["a", "b"])).unwrap();
    assert_eq!(steps, vec!["a", "b"]);
}

#[test]
fn empty_or_error_step_answers_fail() {
    assert!(matches!(
        parse_steps(&json!({ "steps": [] })),
        Err(AssistError::MalformedPayload(_))
    ));
    assert!(matches!(
        parse_steps(&json!({ "answer": "hi" })),
        Err(AssistError::MalformedPayload(_))
    ));
    assert_eq!(
        parse_steps(&json!({ "error": "model offline" })),
        Err(AssistError::Rejected("model offline".to_string()))
    );
}

#[test]
fn project_plan_from_fenced_response_string() {
    let response = "```json\n[\n  {\"text\": \"Pick theme\", \"dueDate\": \"2025-05-03\", \"status\": \"todo\"},\n  {\"text\": \"Write post\", \"dueDate\": \"2025-05-10\"}\n]\n```";
    let drafts = parse_project_plan(&json!({ "response": response })).unwrap();

    assert_eq!(drafts.len(), 2);
    assert_eq!(drafts[0].text, "Pick theme");
    assert_eq!(drafts[1].due_date, NaiveDate::from_ymd_opt(2025, 5, 10).unwrap());
    assert_eq!(drafts[1].status, Status::Todo);
}

#[test]
fn project_plan_accepts_wrapped_shapes() {
    let item = json!({ "text": "step", "dueDate": "2025-01-02", "status": "review" });

    for payload in [
        json!([item.clone()]),
        json!({ "subtasks": [item.clone()] }),
        json!({ "response": [[item.clone()]] }),
        json!({ "response": { "subtasks": [item.clone()] } }),
        json!({ "response": format!("Here you go: {}", json!([item.clone()])) }),
    ] {
        let drafts = parse_project_plan(&payload).unwrap();
        assert_eq!(drafts.len(), 1, "payload {payload}");
        assert_eq!(drafts[0].status, Status::Review);
    }
}

#[test]
fn one_bad_draft_rejects_the_plan() {
    let payload = json!([
        { "text": "ok", "dueDate": "2025-01-02" },
        { "text": "no date" }
    ]);
    assert!(matches!(
        parse_project_plan(&payload),
        Err(AssistError::InvalidSubtasks(_))
    ));

    for bad in [
        json!([{ "text": "  ", "dueDate": "2025-01-02" }]),
        json!([{ "text": "x", "dueDate": "2/1/2025" }]),
        json!([{ "text": "x", "dueDate": "2025-02-30" }]),
        json!([]),
    ] {
        assert!(matches!(
            parse_project_plan(&bad),
            Err(AssistError::InvalidSubtasks(_))
        ));
    }

    assert!(matches!(
        parse_project_plan(&json!({ "response": "I cannot help with that." })),
        Err(AssistError::MalformedPayload(_))
    ));
}

#[test]
fn day_plan_reads_structured_fields() {
    let response = json!({
        "wellness": "Take a walk at lunch.",
        "plan": [
            { "task": "Pay rent", "reason": "due today" },
            { "task": "Outline", "project": "Blog" },
            "Stretch"
        ],
        "overdue": ["[Blog] draft"],
        "advice": "One thing at a time."
    });
    let plan = parse_day_plan(&json!({ "response": response.to_string() })).unwrap();

    assert_eq!(plan.wellness.as_deref(), Some("Take a walk at lunch."));
    assert_eq!(
        plan.plan,
        vec![
            PlanStep {
                task: "Pay rent".to_string(),
                project: None,
                reason: Some("due today".to_string()),
            },
            PlanStep {
                task: "Outline".to_string(),
                project: Some("Blog".to_string()),
                reason: None,
            },
            PlanStep {
                task: "Stretch".to_string(),
                project: None,
                reason: None,
            },
        ]
    );
    assert_eq!(plan.overdue, vec!["[Blog] draft"]);
    assert_eq!(plan.narrative, None);
}

#[test]
fn day_plan_degrades_plain_text_to_narrative() {
    let plan = parse_day_plan(&json!({ "response": "Start with the rent, then rest." })).unwrap();
    assert_eq!(
        plan.narrative.as_deref(),
        Some("Start with the rent, then rest.")
    );
    assert!(plan.plan.is_empty());

    assert!(matches!(
        parse_day_plan(&json!({ "response": "   " })),
        Err(AssistError::MalformedPayload(_))
    ));
}
