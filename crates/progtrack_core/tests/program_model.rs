use chrono::NaiveDate;
use progtrack_core::{Program, ProgramDraft, ProgramValidationError, Theme};
use uuid::Uuid;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn program_new_sets_defaults() {
    let program = Program::new(ProgramDraft::new("Summer Research", date(2026, 6, 1)));

    assert!(!program.id.is_nil());
    assert_eq!(program.name, "Summer Research");
    assert!(program.requirements.is_empty());
    assert_eq!(program.start_date, None);
    assert_eq!(program.end_date, None);
    assert!(!program.has_start_date());
    assert!(!program.has_end_date());
    assert!(!program.is_starred);
    assert!(program.tags.is_empty());
    assert_eq!(program.theme, Theme::ComputerScience);
}

#[test]
fn program_serialization_uses_expected_wire_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let mut program = Program::with_id(
        id,
        ProgramDraft::new("Summer Research", date(2026, 6, 1))
            .location("United States", "Boston")
            .theme(Theme::SocialScience)
            .period(Some(date(2026, 7, 1)), None)
            .requirements(["Transcript", "Essay"])
            .tags(["stem", "paid"])
            .website("https://example.org"),
    );
    program.is_starred = true;

    let json = serde_json::to_value(&program).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["name"], "Summer Research");
    assert_eq!(json["applicationDeadline"], "2026-06-01");
    assert_eq!(json["startDate"], "2026-07-01");
    assert!(json["endDate"].is_null());
    assert!(json.as_object().unwrap().contains_key("endDate"));
    assert_eq!(json["country"], "United States");
    assert_eq!(json["city"], "Boston");
    assert_eq!(json["isVirtual"], false);
    assert_eq!(json["theme"], "Social Science");
    assert_eq!(json["website"], "https://example.org");
    assert_eq!(json["isStarred"], true);
    assert_eq!(json["requirements"], serde_json::json!(["Transcript", "Essay"]));
    assert_eq!(json["tags"], serde_json::json!(["stem", "paid"]));

    let decoded: Program = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, program);
}

#[test]
fn record_without_tags_decodes_with_empty_tags() {
    let value = serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "name": "Legacy",
        "requirements": [],
        "applicationDeadline": "2026-02-10",
        "startDate": null,
        "endDate": null,
        "country": "",
        "city": "",
        "isVirtual": true,
        "theme": "Interdisciplinary",
        "website": "",
        "isStarred": false
    });

    let program: Program = serde_json::from_value(value).unwrap();
    assert!(program.tags.is_empty());
    assert_eq!(program.theme, Theme::Interdisciplinary);
    assert_eq!(program.location_label(), "Virtual");
}

#[test]
fn unknown_theme_label_fails_to_decode() {
    let value = serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "name": "Bad theme",
        "requirements": [],
        "applicationDeadline": "2026-02-10",
        "startDate": null,
        "endDate": null,
        "country": "",
        "city": "",
        "isVirtual": false,
        "theme": "Astrology",
        "website": "",
        "isStarred": false
    });

    assert!(serde_json::from_value::<Program>(value).is_err());
}

#[test]
fn validate_rejects_nil_id_and_blank_name() {
    let nil = Program::with_id(Uuid::nil(), ProgramDraft::new("x", date(2026, 1, 1)));
    assert_eq!(nil.validate(), Err(ProgramValidationError::NilId));

    let blank = Program::new(ProgramDraft::new("   ", date(2026, 1, 1)));
    assert_eq!(blank.validate(), Err(ProgramValidationError::BlankName));
}

#[test]
fn draft_from_program_round_trips_editable_fields() {
    let program = Program::new(
        ProgramDraft::new("Edit me", date(2026, 9, 30))
            .location("Japan", "Kyoto")
            .period(Some(date(2026, 10, 1)), Some(date(2026, 10, 20)))
            .tags(["exchange"]),
    );

    let draft = ProgramDraft::from_program(&program);
    assert_eq!(Program::with_id(program.id, draft), program);
}
