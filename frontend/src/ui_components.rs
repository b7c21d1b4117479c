//! Reusable UI component helpers shared by the pages: buttons, form fields,
//! cards and event wiring.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlInputElement, HtmlTextAreaElement, MouseEvent};

use crate::dom_utils::element_value;

/// Button configuration for the button factory
#[derive(Debug, Clone, Default)]
pub struct ButtonConfig {
    pub id: Option<String>,
    pub text: String,
    pub class_name: Option<String>,
    pub disabled: bool,
}

impl ButtonConfig {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_class(mut self, class_name: &str) -> Self {
        self.class_name = Some(class_name.to_string());
        self
    }

    pub fn disabled_if(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// Create a button element with consistent attributes and styling
pub fn create_button(document: &Document, config: ButtonConfig) -> Result<Element, JsValue> {
    let button = document.create_element("button")?;

    // Always type="button" so nothing submits a surrounding form
    button.set_attribute("type", "button")?;
    button.set_text_content(Some(&config.text));
    button.set_class_name(config.class_name.as_deref().unwrap_or("btn"));

    if let Some(id) = config.id {
        button.set_id(&id);
    }
    if config.disabled {
        button.set_attribute("disabled", "true")?;
    }

    Ok(button)
}

/// Create a primary action button (blue background)
pub fn create_primary_button(document: &Document, text: &str, disabled: bool) -> Result<Element, JsValue> {
    create_button(
        document,
        ButtonConfig::new(text).with_class("btn btn-primary").disabled_if(disabled),
    )
}

/// Create a secondary action button (outlined)
pub fn create_secondary_button(document: &Document, text: &str, disabled: bool) -> Result<Element, JsValue> {
    create_button(
        document,
        ButtonConfig::new(text).with_class("btn btn-outline").disabled_if(disabled),
    )
}

/// Create a delete/danger button (red styling)
pub fn create_danger_button(document: &Document, text: &str, disabled: bool) -> Result<Element, JsValue> {
    create_button(
        document,
        ButtonConfig::new(text).with_class("btn btn-danger").disabled_if(disabled),
    )
}

/// Form field configuration
#[derive(Debug, Clone)]
pub struct FormFieldConfig {
    pub id: String,
    pub label_text: String,
    pub input_type: String,
    pub value: String,
    pub placeholder: Option<String>,
    pub required: bool,
    pub rows: Option<u32>, // For textarea
}

impl FormFieldConfig {
    pub fn new(id: &str, label_text: &str, input_type: &str) -> Self {
        Self {
            id: id.to_string(),
            label_text: label_text.to_string(),
            input_type: input_type.to_string(),
            value: String::new(),
            placeholder: None,
            required: false,
            rows: None,
        }
    }

    pub fn with_value(mut self, value: &str) -> Self {
        self.value = value.to_string();
        self
    }

    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = Some(placeholder.to_string());
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn textarea_with_rows(mut self, rows: u32) -> Self {
        self.input_type = "textarea".to_string();
        self.rows = Some(rows);
        self
    }
}

/// Create a labelled `<input>` or `<textarea>`. Returns the row and the
/// control so callers can attach listeners.
pub fn create_form_field(document: &Document, config: FormFieldConfig) -> Result<(Element, Element), JsValue> {
    let row = document.create_element("div")?;
    row.set_class_name("form-row");

    let label = document.create_element("label")?;
    label.set_text_content(Some(&config.label_text));
    label.set_attribute("for", &config.id)?;
    row.append_child(&label)?;

    let control = if config.input_type == "textarea" {
        let textarea: HtmlTextAreaElement = document.create_element("textarea")?.dyn_into()?;
        if let Some(rows) = config.rows {
            textarea.set_rows(rows);
        }
        textarea.set_value(&config.value);
        Element::from(textarea)
    } else {
        let input: HtmlInputElement = document.create_element("input")?.dyn_into()?;
        input.set_type(&config.input_type);
        input.set_value(&config.value);
        Element::from(input)
    };
    control.set_id(&config.id);
    control.set_class_name("form-control");
    if let Some(placeholder) = &config.placeholder {
        control.set_attribute("placeholder", placeholder)?;
    }
    if config.required {
        control.set_attribute("required", "true")?;
    }

    row.append_child(&control)?;
    Ok((row, control))
}

/// Create a card container with an optional heading.
pub fn create_card(document: &Document, title: Option<&str>) -> Result<Element, JsValue> {
    let card = document.create_element("div")?;
    card.set_class_name("card");

    if let Some(title) = title {
        let heading = document.create_element("h3")?;
        heading.set_class_name("card-title");
        heading.set_text_content(Some(title));
        card.append_child(&heading)?;
    }

    Ok(card)
}

/// Create an actions row container with flex layout
pub fn create_actions_row(document: &Document) -> Result<Element, JsValue> {
    let container = document.create_element("div")?;
    container.set_class_name("actions-row");
    Ok(container)
}

/// `<tag class="class">text</tag>`
pub fn create_text(document: &Document, tag: &str, class_name: &str, text: &str) -> Result<Element, JsValue> {
    let el = document.create_element(tag)?;
    if !class_name.is_empty() {
        el.set_class_name(class_name);
    }
    el.set_text_content(Some(text));
    Ok(el)
}

/// `create_text` appended to `parent`; returns the new element.
pub fn append_text(
    document: &Document,
    parent: &Element,
    tag: &str,
    class_name: &str,
    text: &str,
) -> Result<Element, JsValue> {
    let el = create_text(document, tag, class_name, text)?;
    parent.append_child(&el)?;
    Ok(el)
}

/// Centered spinner with a caption.
pub fn create_spinner(document: &Document, caption: &str) -> Result<Element, JsValue> {
    let wrapper = document.create_element("div")?;
    wrapper.set_class_name("loading");
    let spinner = document.create_element("div")?;
    spinner.set_class_name("spinner");
    wrapper.append_child(&spinner)?;
    append_text(document, &wrapper, "p", "muted", caption)?;
    Ok(wrapper)
}

/// Attach a click handler that lives as long as the element.
pub fn on_click<F>(el: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut() + 'static,
{
    let cb = Closure::wrap(Box::new(move |_: MouseEvent| handler()) as Box<dyn FnMut(_)>);
    el.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Attach an `input` handler receiving the control's current value.
pub fn on_input<F>(el: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut(String) + 'static,
{
    let cb = Closure::wrap(Box::new(move |event: Event| {
        if let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) {
            handler(element_value(&target));
        }
    }) as Box<dyn FnMut(_)>);
    el.add_event_listener_with_callback("input", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Submit-on-Enter for single-line auth inputs.
pub fn on_enter<F>(el: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut() + 'static,
{
    let cb = Closure::wrap(Box::new(move |event: web_sys::KeyboardEvent| {
        if event.key() == "Enter" {
            event.prevent_default();
            handler();
        }
    }) as Box<dyn FnMut(_)>);
    el.add_event_listener_with_callback("keydown", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}
