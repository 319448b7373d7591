use chrono::{Datelike, Duration, Local, NaiveDate};
use regcheck::{age_group, email, phone, AgeGroup, AgeGroupFormat, AgeRange};

fn years_before(today: NaiveDate, years: i32) -> NaiveDate {
    // fall back to 28 Feb when today is 29 Feb and the target year is common
    NaiveDate::from_ymd_opt(today.year() - years, today.month(), today.day())
        .or_else(|| NaiveDate::from_ymd_opt(today.year() - years, today.month(), today.day() - 1))
        .unwrap()
}

#[test]
fn phone_grammar() {
    let accepted = [
        "0712345678",
        "0112345678",
        "+254712345678",
        "+254112345678",
        "+1234567890",
        "+447911123456",
        "+123456789012345",
        " 0712-345-678 ",
        "(+254) 712 345 678",
    ];
    for raw in accepted {
        assert!(phone::is_valid_phone(raw), "expected valid: {:?}", raw);
        assert_eq!(phone::validation_message(raw), "");
    }

    let rejected = [
        "0212345678",
        "07123456",
        "+123456789",
        "+1234567890123456",
        "++254712345678",
        "0712345678x",
        "phone",
    ];
    for raw in rejected {
        assert!(!phone::is_valid_phone(raw), "expected invalid: {:?}", raw);
        assert_eq!(phone::validation_message(raw), phone::INVALID_MESSAGE);
    }
}

#[test]
fn phone_required_message() {
    assert!(!phone::is_valid_phone(""));
    assert_eq!(phone::validation_message(""), "Phone number is required");
    let result = phone::detailed_validate("");
    assert!(!result.is_valid);
    assert_eq!(result.error_message, "Phone number is required");
}

#[test]
fn phone_normalize_is_stable_on_normalized_input() {
    assert_eq!(phone::normalize("0712345678"), "+254712345678");
    assert_eq!(phone::normalize("0112345678"), "+254112345678");
    assert_eq!(phone::normalize("+254712345678"), "+254712345678");
    for raw in ["0712345678", "0112 345 678", "+254712345678"] {
        let once = phone::normalize(raw);
        assert_eq!(phone::normalize(&once), once);
        assert!(phone::is_valid_phone(&once));
    }
}

#[test]
fn phone_format_regroups_from_digits_only() {
    // Format is not documented as idempotent. Kenyan numbers happen to be
    // regrouped from scratch, but anything else is passed through untouched,
    // separators included.
    let spaced = phone::format("+254712345678");
    assert_eq!(spaced, "+254 712 345 678");
    assert_eq!(phone::format(&spaced), "+254 712 345 678");

    let foreign = "+1 (555) 010-9999";
    assert_eq!(phone::format(foreign), foreign);
    assert_ne!(phone::format(foreign), phone::normalize(foreign));
}

#[test]
fn email_examples() {
    assert!(email::is_valid_email("user@example.com"));
    assert!(email::is_valid_email("user@example.com."));
    assert!(!email::is_valid_email("not-an-email"));
    assert!(!email::is_valid_email(""));

    assert_eq!(email::validation_message(""), "Email is required");
    assert_eq!(
        email::validation_message("not-an-email"),
        "Please enter a valid email address"
    );
    assert!(email::detailed_validate("user@example.com").error_message.is_empty());
}

#[test]
fn calculate_age_against_today() {
    let today = Local::now().date_naive();

    let dob = years_before(today, 20);
    assert_eq!(age_group::calculate_age(dob), 20);

}

#[test]
fn calculate_age_day_before_birthday() {
    let today = NaiveDate::from_ymd_opt(2026, 12, 31).unwrap();
    let dob = years_before(today, 20);
    assert_eq!(age_group::calculate_age_on(dob, today), 20);

    let earlier = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
    let not_yet = years_before(earlier, 20) + Duration::days(1);
    assert_eq!(age_group::calculate_age_on(not_yet, earlier), 19);
}

#[test]
fn age_group_lookup() {
    assert_eq!(
        age_group::get_age_group(10, AgeGroupFormat::Standard),
        Some(AgeGroup {
            min: 10,
            max: 11,
            label: "U11".to_string(),
        })
    );
    assert_eq!(age_group::get_age_group(200, AgeGroupFormat::Standard), None);
}

#[test]
fn first_match_and_all_matches_agree_on_shipped_tables() {
    // get_valid_age_groups returns every match, get_age_group only the first.
    // They coincide today only because the tables do not overlap.
    for format in [AgeGroupFormat::Standard, AgeGroupFormat::Alternate] {
        for age in -5..=110 {
            let first = age_group::get_age_group(age, format);
            let all = age_group::get_valid_age_groups(age, format);
            assert!(all.len() <= 1);
            assert_eq!(first, all.into_iter().next());
        }
    }
}

#[test]
fn age_group_validation() {
    assert!(age_group::validate_age_for_age_group(13, "U13", AgeGroupFormat::Standard).is_valid);

    let too_old = age_group::validate_age_for_age_group(14, "U13", AgeGroupFormat::Standard);
    assert!(!too_old.is_valid);
    assert!(too_old.message.unwrap().contains("14"));

    let unknown = age_group::validate_age_for_age_group(13, "NotAGroup", AgeGroupFormat::Standard);
    assert!(!unknown.is_valid);
    assert!(unknown.message.unwrap().contains("Invalid age group"));
}

#[test]
fn age_group_label_parsing() {
    assert_eq!(age_group::parse_age_group("U9"), Some(AgeRange { min: 0, max: 9 }));
    assert_eq!(age_group::parse_age_group("12-14"), Some(AgeRange { min: 12, max: 14 }));
    assert_eq!(age_group::parse_age_group("Under 12"), Some(AgeRange { min: 0, max: 11 }));
    assert_eq!(age_group::parse_age_group("51+"), Some(AgeRange { min: 51, max: 100 }));
    assert_eq!(age_group::parse_age_group("garbage"), None);
}
