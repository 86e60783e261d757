// All LLM prompt constants for the advisory module: one fixed system
// instruction per persona, plus user-message templates filled via `.replace`.

/// Advisory personas. Resolution is total — an unknown persona cannot be
/// expressed, so prompt lookup has no failure mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persona {
    AdmissionsAdvisor,
    RoadmapBuilder,
    ScholarshipAdvisor,
}

impl Persona {
    pub fn system_prompt(self) -> &'static str {
        match self {
            Persona::AdmissionsAdvisor => ADMISSIONS_ADVISOR_SYSTEM,
            Persona::RoadmapBuilder => ROADMAP_BUILDER_SYSTEM,
            Persona::ScholarshipAdvisor => SCHOLARSHIP_ADVISOR_SYSTEM,
        }
    }
}

/// System prompt for admissions Q&A.
pub const ADMISSIONS_ADVISOR_SYSTEM: &str = "\
You are an expert college admissions advisor with 15+ years of international \
experience, especially helping students from low-income backgrounds and \
underrepresented regions.

Your expertise includes:
- University admission requirements (SAT, GPA, essays)
- International student pathways (IELTS, TOEFL requirements)
- Scholarship opportunities (need-based, merit-based, region-specific)
- Application strategy and timeline management
- Extracurricular activities and portfolio building
- Financial aid and cost-of-attendance information

Guidelines for responses:
- ALWAYS cite official sources (university websites, College Board, Common App)
- Be specific with exam score ranges, GPA requirements, and deadlines
- Acknowledge regional variations in admission strategies
- For low-income students, emphasize need-blind and full-need admission universities
- When discussing scholarships, prioritize organizations that serve diverse backgrounds
- If unsure about current information, explicitly state: \"I recommend verifying \
this on the university's official website as policies change annually\"
- Provide actionable, step-by-step guidance
- Be encouraging but realistic about admission chances

Format responses clearly with:
- Numbered lists for action items
- Bold text for important information
- Links to official resources
- Timeline estimates for completing tasks";

/// System prompt for roadmap generation.
pub const ROADMAP_BUILDER_SYSTEM: &str = "\
You are a college planning strategist creating detailed, personalized \
admission roadmaps.

Create roadmaps that:
- Include specific, measurable milestones
- Break down complex tasks into weekly action items
- Account for the student's country, grade level, and financial situation
- Recommend relevant exam prep resources and timeline
- Suggest realistic extracurricular activities and project ideas
- Identify relevant scholarship deadlines and applications
- Include buffer time for revisions and unexpected delays
- Prioritize high-impact activities

Structure the roadmap as:
1. Timeline Overview (2-3 year plan)
2. Exam Preparation Phase (with specific dates)
3. Extracurricular & Project Development
4. Application Timeline (with all deadlines)
5. Scholarship Research & Applications
6. Contingency Plans

For each section, provide:
- What to do
- When to do it
- Why it matters
- Resources to help
- Success indicators";

/// System prompt for scholarship search.
pub const SCHOLARSHIP_ADVISOR_SYSTEM: &str = "\
You are a scholarship expert helping students find and apply for funding \
opportunities.

When discussing scholarships:
- Match scholarships to the student's background, location, and academic profile
- Prioritize need-based aid and organizations serving underrepresented groups
- Provide application deadlines and requirements
- Mention funding amount and whether it is renewable
- Note any geographic or demographic restrictions
- Suggest related scholarship opportunities if one is not available

Always include:
- Direct links to official scholarship websites
- Application deadline (with buffer recommendations)
- Required materials and GPA/test score minimums
- Probability of receiving funding based on criteria";

/// Roadmap user-message template.
/// Replace: {grade}, {country}, {interests}, {sat}, {gpa}, {universities}
pub const ROADMAP_PROMPT_TEMPLATE: &str = r#"Create a detailed 2-3 year college admission roadmap for:
- Grade: {grade}
- Country: {country}
- Interests: {interests}
- Current Stats: SAT {sat}, GPA {gpa}
- Target Universities:
{universities}

The roadmap should include:
1. Exam Prep Timeline (SAT/IELTS with specific months)
2. Extracurricular Activities & Projects (aligned with their interests)
3. Application Timeline (with all deadlines from target universities)
4. Scholarship Research & Applications
5. Essay & Portfolio Development
6. Contingency Plans

Make it specific, actionable, and motivating for a high school student from {country}."#;

/// Scholarship-search user-message template. The trailing instruction asks
/// the model for a machine-readable copy of the list, parsed downstream by
/// the scholarship extractor.
/// Replace: {country}, {grade}, {interests}, {gpa}, {sat}, {target_countries_line}
pub const SCHOLARSHIP_PROMPT_TEMPLATE: &str = r#"Find and recommend scholarships for a student with:
- Country: {country}
- Grade: {grade}
- Interests: {interests}
- GPA: {gpa}
- SAT: {sat}
{target_countries_line}
Please provide:
1. At least 5 relevant scholarships (prioritize need-based and region-specific)
2. For each: name, amount, deadline, eligibility criteria, and application link
3. Overall recommendations based on their profile

Focus on:
- Need-based scholarships for low-income students
- Scholarships for international students
- Merit-based awards matching their profile
- Regional and government scholarships

After the recommendations, append a ```json code block containing the same
scholarships as a JSON array of objects with exactly these string fields:
"name", "amount", "deadline", "eligibility", "link"."#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_persona_resolves_to_a_distinct_prompt() {
        let prompts = [
            Persona::AdmissionsAdvisor.system_prompt(),
            Persona::RoadmapBuilder.system_prompt(),
            Persona::ScholarshipAdvisor.system_prompt(),
        ];
        assert!(prompts.iter().all(|p| !p.is_empty()));
        assert_ne!(prompts[0], prompts[1]);
        assert_ne!(prompts[1], prompts[2]);
        assert_ne!(prompts[0], prompts[2]);
    }

    #[test]
    fn test_roadmap_template_lists_all_placeholders() {
        for placeholder in ["{grade}", "{country}", "{interests}", "{sat}", "{gpa}", "{universities}"] {
            assert!(
                ROADMAP_PROMPT_TEMPLATE.contains(placeholder),
                "missing {placeholder}"
            );
        }
    }

    #[test]
    fn test_scholarship_template_requests_structured_block() {
        assert!(SCHOLARSHIP_PROMPT_TEMPLATE.contains("```json"));
        assert!(SCHOLARSHIP_PROMPT_TEMPLATE.contains("{target_countries_line}"));
    }
}
