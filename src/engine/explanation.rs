use super::scorer::CompatibilityResult;
use crate::constants::STARTER_COUNT;
use crate::profile::Profile;

/// Human-readable rationale for a computed result.
pub fn explain(result: &CompatibilityResult) -> String {
    compose_explanation(
        result.score,
        &result.shared_interests,
        &result.complementary_skills,
    )
}

pub(crate) fn compose_explanation(score: u32, shared: &[String], complementary: &[String]) -> String {
    let mut clauses = Vec::with_capacity(2);
    if !shared.is_empty() {
        clauses.push(format!("shared interests in {}", first_two(shared)));
    }
    if !complementary.is_empty() {
        clauses.push(format!("complementary skills in {}", first_two(complementary)));
    }
    if clauses.is_empty() {
        clauses.push("complementary professional backgrounds".to_string());
    }

    format!(
        "{}% compatibility based on {}. Great potential for mutual learning and collaboration.",
        score,
        clauses.join(" and ")
    )
}

fn first_two(values: &[String]) -> String {
    values.iter().take(2).map(String::as_str).collect::<Vec<_>>().join(" and ")
}

/// Three opening lines `a` could send to `b`.
pub fn starters(a: &Profile, b: &Profile, shared: &[String]) -> [String; STARTER_COUNT] {
    let mut candidates = Vec::with_capacity(STARTER_COUNT);

    if let Some(interest) = shared.first() {
        candidates.push(format!(
            "Hi {}! I noticed we both have an interest in {}. I'd love to learn more about your work at {}.",
            b.display_name(),
            interest,
            b.company().unwrap_or("your company")
        ));
    }

    if let Some(industry) = b.industry() {
        candidates.push(format!(
            "Great to connect! I see you're working in {}. I'd be interested to hear your perspective on current trends.",
            industry
        ));
    }

    match (a.industry(), b.industry()) {
        (Some(own), Some(theirs)) if own != theirs => candidates.push(format!(
            "Hi there! I work in {} and I'm curious about your experience in {}. Would love to exchange insights!",
            own, theirs
        )),
        _ => candidates.push(
            "Hi there! Our profiles seem to complement each other well. Would you be open to a brief chat about our shared interests?"
                .to_string(),
        ),
    }

    let mut candidates = candidates.into_iter();
    std::array::from_fn(|_| candidates.next().unwrap_or_else(|| closing_starter(b)))
}

pub(crate) fn closing_starter(b: &Profile) -> String {
    format!(
        "Hi {}! I'd love to connect and learn more about your experience in {}.",
        b.display_name(),
        b.industry().unwrap_or("your field")
    )
}
