// src/widgets/text.rs — Static text block

use crate::core::types::Output;
use crate::infra::errors::BarError;
use crate::widgets::args::{bind, Param};
use crate::widgets::types::{ArgSpec, Widget};

pub const TYPE_ID: &str = "widgets.text.Text";

const PARAMS: &[Param] = &[Param::required("text"), Param::optional("name")];

pub struct Text {
    name: String,
    text: String,
}

pub fn build(args: &ArgSpec) -> Result<Box<dyn Widget>, BarError> {
    let a = bind(TYPE_ID, PARAMS, args)?;
    Ok(Box::new(Text {
        text: a.str_or("text", "")?,
        name: a.str_or("name", "text")?,
    }))
}

impl Widget for Text {
    fn name(&self) -> &str {
        &self.name
    }

    fn query(&mut self) -> anyhow::Result<Option<Output>> {
        Ok(Some(Output::new(&self.name, &self.text)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_positional_name() {
        let mut w = build(&ArgSpec::Positional(vec![json!("hi"), json!("motd")])).unwrap();
        assert_eq!(w.name(), "motd");
        assert_eq!(w.query().unwrap().unwrap(), Output::new("motd", "hi"));
    }

    #[test]
    fn test_requires_text() {
        assert!(build(&ArgSpec::None).is_err());
    }
}
