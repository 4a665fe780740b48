use crate::{
    app::{FormOptions, Notice, StyleDelivery},
    domain::{FieldSpec, FieldType},
    form::{ControlValue, FieldState, FormState},
};

use super::{
    markup::{Element, Node},
    styles::stylesheet,
};

pub const LOAD_FAILURE_TITLE: &str = "Unable to Load Form";
pub const LOAD_FAILURE_HINT: &str = "Please check your connection and try again.";

/// Per-render inputs that do not come from the schema.
#[derive(Debug, Clone, Copy)]
pub struct ViewContext<'a> {
    pub form_id: &'a str,
    pub options: &'a FormOptions,
    pub notices: &'a [Notice],
    pub submitting: bool,
}

/// Controls rendered for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlGroup {
    pub name: String,
    pub element: Element,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub stylesheet: Option<Node>,
    pub container_class: String,
    pub title: Option<Element>,
    pub form: Element,
    pub groups: Vec<ControlGroup>,
    pub submit: Element,
    pub notices: Vec<Element>,
}

impl FormView {
    /// Assemble the complete container element.
    pub fn to_element(&self) -> Element {
        let mut container = Element::new("div").class(self.container_class.clone());
        if let Some(title) = &self.title {
            container = container.child(title.clone());
        }
        let form = self
            .form
            .clone()
            .children(self.groups.iter().map(|group| group.element.clone()))
            .child(self.submit.clone());
        container
            .child(form)
            .children(self.notices.iter().cloned())
    }

    pub fn to_html(&self) -> String {
        let mut html = self
            .stylesheet
            .as_ref()
            .map(Node::to_html)
            .unwrap_or_default();
        html.push_str(&self.to_element().to_html());
        html
    }

    pub fn group(&self, name: &str) -> Option<&ControlGroup> {
        self.groups.iter().find(|group| group.name == name)
    }
}

pub fn build_view(state: &FormState, ctx: ViewContext<'_>) -> FormView {
    let options = ctx.options;
    let title = (!state.title.is_empty()).then(|| {
        Element::new("h1")
            .class(options.class("form-title"))
            .text(state.title.clone())
    });
    let form = Element::new("form")
        .attr("id", form_dom_id(options, ctx.form_id))
        .class(options.class("form"));
    let groups = state
        .fields()
        .iter()
        .map(|field| ControlGroup {
            name: field.name().to_string(),
            element: control_group(field, options),
        })
        .collect();
    let submit = Element::new("button")
        .attr("type", "submit")
        .class(options.class("submit"))
        .flag("disabled", ctx.submitting)
        .text(options.submit_label.clone());
    let notices = ctx
        .notices
        .iter()
        .map(|notice| {
            Element::new("div")
                .class(format!("{} {}", options.class("message"), notice.kind.class()))
                .attr("role", "status")
                .text(notice.message.clone())
        })
        .collect();

    FormView {
        stylesheet: stylesheet_node(options),
        container_class: options.class("form-container"),
        title,
        form,
        groups,
        submit,
        notices,
    }
}

/// Markup written into the target when the form cannot be loaded.
pub fn load_failure_html(options: &FormOptions) -> String {
    let block = Element::new("div")
        .class(options.class("load-error"))
        .attr("role", "alert")
        .child(Element::new("h3").text(LOAD_FAILURE_TITLE))
        .child(Element::new("p").text(LOAD_FAILURE_HINT));
    let mut html = stylesheet_node(options)
        .map(|node| node.to_html())
        .unwrap_or_default();
    html.push_str(&block.to_html());
    html
}

pub fn form_dom_id(options: &FormOptions, form_id: &str) -> String {
    options.class(&format!("form-{form_id}"))
}

fn stylesheet_node(options: &FormOptions) -> Option<Node> {
    let id = options.class("styles");
    match &options.stylesheet {
        StyleDelivery::Inline => Some(
            Element::new("style")
                .attr("id", id)
                .child(Node::Raw(stylesheet(&options.class_prefix)))
                .into(),
        ),
        StyleDelivery::Link(href) => Some(
            Element::new("link")
                .attr("id", id)
                .attr("rel", "stylesheet")
                .attr("href", href.clone())
                .into(),
        ),
        StyleDelivery::None => None,
    }
}

fn control_group(field: &FieldState, options: &FormOptions) -> Element {
    let spec = &field.spec;
    if spec.field_type == FieldType::Checkbox {
        return checkbox_group(field, options);
    }
    Element::new("div")
        .class(options.class("field"))
        .child(
            Element::new("label")
                .attr("for", spec.name.clone())
                .text(spec.label.clone()),
        )
        .child(control(field, options))
        .child(error_slot(field, options))
}

fn control(field: &FieldState, options: &FormOptions) -> Element {
    let spec = &field.spec;
    match (spec.field_type, field.control()) {
        (FieldType::Textarea, ControlValue::Text(text)) => named("textarea", spec)
            .attr_opt("placeholder", spec.placeholder())
            .flag("required", spec.required)
            .flag("readonly", spec.read_only)
            .flag("disabled", spec.disabled)
            .text(textarea_body(text)),
        (FieldType::Select, ControlValue::Choice(selected)) => named("select", spec)
            .flag("required", spec.required)
            .flag("disabled", spec.disabled)
            .children(spec.options().iter().map(|option| {
                Element::new("option")
                    .attr("value", option.value())
                    .flag("selected", selected.as_deref() == Some(option.value()))
                    .text(option.label())
            })),
        (FieldType::Radio, ControlValue::Choice(selected)) => {
            radio_group(spec, selected.as_deref(), options)
        }
        (_, control) => {
            let value = match control {
                ControlValue::Text(text) => Some(text.as_str()).filter(|text| !text.is_empty()),
                _ => None,
            };
            named("input", spec)
                .attr("type", spec.field_type.input_kind())
                .attr_opt("placeholder", spec.placeholder())
                .flag("required", spec.required)
                .attr_opt("pattern", spec.pattern())
                .attr_opt("value", value)
                .flag("readonly", spec.read_only)
                .flag("disabled", spec.disabled)
        }
    }
}

fn radio_group(spec: &FieldSpec, selected: Option<&str>, options: &FormOptions) -> Element {
    let items = spec.options().iter().map(|option| {
        let id = format!("{}-{}", spec.name, option.value());
        Element::new("div")
            .class(options.class("radio-item"))
            .child(
                Element::new("input")
                    .attr("type", "radio")
                    .attr("name", spec.name.clone())
                    .attr("value", option.value())
                    .attr("id", id.clone())
                    .flag("checked", selected == Some(option.value()))
                    .flag("required", spec.required)
                    .flag("disabled", spec.disabled),
            )
            .child(Element::new("label").attr("for", id).text(option.label()))
    });
    Element::new("div")
        .class(options.class("radio-group"))
        .attr("id", spec.name.clone())
        .attr("role", "radiogroup")
        .children(items)
}

fn checkbox_group(field: &FieldState, options: &FormOptions) -> Element {
    let spec = &field.spec;
    let checked = matches!(field.control(), ControlValue::Checked(true));
    let mut group = Element::new("div")
        .class(options.class("checkbox"))
        .child(
            named("input", spec)
                .attr("type", "checkbox")
                .flag("checked", checked)
                .flag("required", spec.required)
                .flag("readonly", spec.read_only)
                .flag("disabled", spec.disabled),
        )
        .child(
            Element::new("label")
                .attr("for", spec.name.clone())
                .text(spec.label.clone()),
        );
    if field.error.is_some() {
        group = group.child(error_slot(field, options));
    }
    group
}

fn error_slot(field: &FieldState, options: &FormOptions) -> Element {
    let class = options.class("error");
    match &field.error {
        Some(message) => Element::new("div")
            .class(format!("{class} show"))
            .attr("role", "alert")
            .text(message.clone()),
        None => Element::new("div").class(class),
    }
}

/// Parsers drop one newline right after `<textarea>`, so a leading one is doubled.
fn textarea_body(text: &str) -> String {
    if text.starts_with('\n') || text.starts_with("\r\n") {
        format!("\n{text}")
    } else {
        text.to_string()
    }
}

fn named(tag: &'static str, spec: &FieldSpec) -> Element {
    Element::new(tag)
        .attr("name", spec.name.clone())
        .attr("id", spec.name.clone())
}
