// Probability estimation prompt.
// The instruction template is the complete contract with the model: four
// probability values, five suggestions tagged by area, six 0-1 skill levels,
// and the exact JSON object shape. Replace `{data}` before sending.

pub const ESTIMATE_PROMPT_TEMPLATE: &str = r#"Based on the following data: {data},
    what is the percentage probability of employment in 3 months, 6 months, 9 months, and 9+ months?
    Additionally, provide improvement suggestions for increasing employment probability in these areas:
      Networking, Technical Skills, Soft Skills, Resume, Interview Preparation.
    Please also assess the following Skills:
      Technical Skills, Soft Skills, Resume, Interview Skills, Knowledge, Networking,
      providing the level of each skill as a number between 0 and 1, where 0 is 'Basic' and 1 is 'Expert'.
    Please provide the response in the following JSON format:
    {
    "Probability3Months": "value",
    "Probability6Months": "value",
    "Probability9Months": "value",
    "Probability9PlusMonths": "value",
    "Suggestions": [
      {"area": "Networking", "suggestion": "value"},
      {"area": "Technical Skills", "suggestion": "value"},
      {"area": "Soft Skills", "suggestion": "value"},
      {"area": "Resume", "suggestion": "value"},
      {"area": "Interview Preparation", "suggestion": "value"}
    ],
    "Skills": [
      {"skill": "Technical Skills", "level": "value"},
      {"skill": "Soft Skills", "level": "value"},
      {"skill": "Resume", "level": "value"},
      {"skill": "Interview Skills", "level": "value"},
      {"skill": "Knowledge", "level": "value"},
      {"skill": "Networking", "level": "value"}
    ]
  }."#;
