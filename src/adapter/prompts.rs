use crate::profile::Profile;

fn describe(profile: &Profile) -> String {
    format!(
        "Name: {}\nBio: {}\nCompany: {}\nPosition: {}\nIndustry: {}\nInterests: {}\nSkills: {}\nGoals: {}\nExperience: {}",
        profile.full_name,
        profile.bio().unwrap_or("No bio provided"),
        profile.company().unwrap_or("Not specified"),
        profile.position().unwrap_or("Not specified"),
        profile.industry().unwrap_or("Not specified"),
        profile.interests.join(", "),
        profile.skills.join(", "),
        profile.goals.join(", "),
        profile.experience_label(),
    )
}

pub fn compatibility(a: &Profile, b: &Profile) -> String {
    format!(
        "Analyze the compatibility between these two professional profiles for networking and mentorship matching.\n\n\
         Profile 1:\n{}\n\nProfile 2:\n{}\n\n\
         Respond with a JSON object containing:\n\
         - compatibility_score (0-100)\n\
         - shared_interests (array of common interests)\n\
         - complementary_skills (array of skills that complement each other)\n\
         - goal_alignment (0-1 score of how well their goals align)\n\
         - explanation (2-3 sentences on why they are compatible)\n\
         - conversation_starters (array of 3 conversation starters)\n\n\
         Focus on professional networking value, mentorship opportunities and mutual benefit.",
        describe(a),
        describe(b)
    )
}

pub fn profile_summary(profile: &Profile) -> String {
    format!(
        "Write a concise professional summary for this profile:\n\n{}\n\n\
         Use 1-2 sentences highlighting key strengths, expertise and what they bring to networking. \
         Return only the summary text.",
        describe(profile)
    )
}

pub fn enhanced_summary(profile: &Profile) -> String {
    format!(
        "Create an enhanced professional profile analysis for this user:\n\n{}\n\n\
         Respond with a JSON object containing:\n\
         - summary (1-2 sentence professional summary)\n\
         - key_strengths (array of 3-4 key strengths)\n\
         - networking_value (1 sentence about what they bring to networking)\n\
         - suggested_connections (array of 3 types of people they should connect with)",
        describe(profile)
    )
}

pub fn conversation_starters(a: &Profile, b: &Profile, shared: &[String]) -> String {
    let role = |p: &Profile| {
        format!(
            "{} - {} at {}",
            p.display_name(),
            p.position().unwrap_or("Professional"),
            p.company().unwrap_or("their company")
        )
    };
    let topics = if shared.is_empty() {
        "Professional networking".to_string()
    } else {
        shared.join(", ")
    };

    format!(
        "Generate exactly 3 conversation starters for two professionals who just matched. \
         Return ONLY a JSON array of strings.\n\n\
         Person 1: {}\nPerson 2: {}\nShared interests: {}\n\n\
         Keep a professional but friendly tone, reference shared interests or complementary expertise, \
         stay open-ended and use 15-25 words per starter. Use single quotes inside starters if needed.\n\n\
         Format: [\"starter 1\", \"starter 2\", \"starter 3\"]",
        role(a),
        role(b),
        topics
    )
}

pub fn networking_insights(profile: &Profile) -> String {
    format!(
        "Generate 3 networking insights for this professional:\n\n{}\n\n\
         Each insight should be actionable, based on the profile, and 1-2 sentences long. \
         Return exactly 3 insights as a JSON array of strings.",
        describe(profile)
    )
}
