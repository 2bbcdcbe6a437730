use anyhow::Result;

use super::super::Container;

pub struct AskController<'a> {
    container: &'a Container,
}

impl<'a> AskController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    /// Run one prompt and return the same text the `ask` field would carry.
    pub async fn ask(&self, prompt: String) -> Result<String> {
        let use_case = self.container.ask_use_case();
        let completion = use_case.execute(&prompt).await;
        Ok(completion.into_field_value())
    }
}
