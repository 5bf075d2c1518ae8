//! Abstract factory: whole families of widgets that are guaranteed to
//! match, because one factory produces all of them.

pub trait Button {
    fn render(&self) -> String;
}

pub trait Checkbox {
    fn render(&self, checked: bool) -> String;
}

/// Produces a matched set of widgets for one theme.
pub trait WidgetFactory {
    fn theme(&self) -> &'static str;
    fn button(&self, label: &str) -> Box<dyn Button>;
    fn checkbox(&self, label: &str) -> Box<dyn Checkbox>;
}

struct LightButton {
    label: String,
}

struct LightCheckbox {
    label: String,
}

struct DarkButton {
    label: String,
}

struct DarkCheckbox {
    label: String,
}

impl Button for LightButton {
    fn render(&self) -> String {
        format!("( {} )", self.label)
    }
}

impl Checkbox for LightCheckbox {
    fn render(&self, checked: bool) -> String {
        format!("({}) {}", if checked { "x" } else { " " }, self.label)
    }
}

impl Button for DarkButton {
    fn render(&self) -> String {
        format!("[ {} ]", self.label)
    }
}

impl Checkbox for DarkCheckbox {
    fn render(&self, checked: bool) -> String {
        format!("[{}] {}", if checked { "■" } else { " " }, self.label)
    }
}

pub struct LightFactory;
pub struct DarkFactory;

impl WidgetFactory for LightFactory {
    fn theme(&self) -> &'static str {
        "light"
    }

    fn button(&self, label: &str) -> Box<dyn Button> {
        Box::new(LightButton {
            label: label.to_string(),
        })
    }

    fn checkbox(&self, label: &str) -> Box<dyn Checkbox> {
        Box::new(LightCheckbox {
            label: label.to_string(),
        })
    }
}

impl WidgetFactory for DarkFactory {
    fn theme(&self) -> &'static str {
        "dark"
    }

    fn button(&self, label: &str) -> Box<dyn Button> {
        Box::new(DarkButton {
            label: label.to_string(),
        })
    }

    fn checkbox(&self, label: &str) -> Box<dyn Checkbox> {
        Box::new(DarkCheckbox {
            label: label.to_string(),
        })
    }
}

/// Client code sees only the abstract factory, never a concrete widget.
fn render_form(factory: &dyn WidgetFactory) -> String {
    format!(
        "{} theme:\n  {}\n  {}",
        factory.theme(),
        factory.button("Save").render(),
        factory.checkbox("Remember me").render(true),
    )
}

pub fn demo() {
    println!("{}", render_form(&LightFactory));
    println!("{}", render_form(&DarkFactory));
}
