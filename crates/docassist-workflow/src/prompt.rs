/// Build the clinical analysis prompt for a consultation transcript
///
/// The transcript is substituted verbatim.
pub fn clinical_prompt(transcript: &str) -> String {
    format!(
        "Act as a senior health expert. Analyze this doctor-patient conversation:\n\
         {transcript}\n\
         \n\
         Provide structured response with:\n\
         - Key symptoms observed\n\
         - Potential diagnoses (list 3 possibilities)\n\
         - Recommended medical tests\n\
         - Urgency level (low/medium/high)\n\
         - Brief clinical rationale\n\
         \n\
         Format response in markdown with clear section headings."
    )
}
