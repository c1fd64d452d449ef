/// Instruction-delimited prompt: an outer block carrying the system
/// instruction and an inner block carrying the question.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    system_prompt: String,
}

impl PromptTemplate {
    pub fn new(system_prompt: &str) -> Self {
        Self {
            system_prompt: system_prompt.trim().to_string(),
        }
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    pub fn render(&self, question: &str) -> String {
        format!(
            "<s>[INST]{}[/INST]</s>\n\n[INST]{}[/INST]",
            self.system_prompt, question
        )
    }
}
