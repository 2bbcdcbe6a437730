use anyhow::Result;

use super::super::Container;

pub struct SchemaController<'a> {
    container: &'a Container,
}

impl<'a> SchemaController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub fn sdl(&self) -> Result<String> {
        Ok(self.container.schema().sdl())
    }
}
