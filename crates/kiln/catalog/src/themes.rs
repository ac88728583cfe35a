//! UI theme family: buttons and checkboxes painted in one theme

use kiln_core::{FactoryRegistry, FamilyFactory, Rendition, Result, VariantKey};
use std::sync::Arc;

pub const FAMILY: &str = "themes";
pub const LIGHT: &str = "light";
pub const DARK: &str = "dark";

pub trait Button {
    fn paint(&self) -> Rendition;
}

pub trait Checkbox {
    fn paint(&self) -> Rendition;
    fn toggle(&mut self) -> bool;
}

pub trait ThemeFactory: FamilyFactory {
    fn create_button(&self) -> Box<dyn Button>;
    fn create_checkbox(&self) -> Box<dyn Checkbox>;
}

pub struct LightButton;
pub struct DarkButton;

#[derive(Default)]
pub struct LightCheckbox {
    checked: bool,
}

#[derive(Default)]
pub struct DarkCheckbox {
    checked: bool,
}

impl Button for LightButton {
    fn paint(&self) -> Rendition {
        Rendition::new(LIGHT, "button", "Rendering a light button")
    }
}

impl Button for DarkButton {
    fn paint(&self) -> Rendition {
        Rendition::new(DARK, "button", "Rendering a dark button")
    }
}

impl Checkbox for LightCheckbox {
    fn paint(&self) -> Rendition {
        let mark = if self.checked { "checked" } else { "unchecked" };
        Rendition::new(LIGHT, "checkbox", format!("Rendering a light {mark} checkbox"))
    }

    fn toggle(&mut self) -> bool {
        self.checked = !self.checked;
        self.checked
    }
}

impl Checkbox for DarkCheckbox {
    fn paint(&self) -> Rendition {
        let mark = if self.checked { "checked" } else { "unchecked" };
        Rendition::new(DARK, "checkbox", format!("Rendering a dark {mark} checkbox"))
    }

    fn toggle(&mut self) -> bool {
        self.checked = !self.checked;
        self.checked
    }
}

pub struct LightThemeFactory;

impl FamilyFactory for LightThemeFactory {
    fn variant(&self) -> VariantKey {
        LIGHT.into()
    }
}

impl ThemeFactory for LightThemeFactory {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(LightButton)
    }

    fn create_checkbox(&self) -> Box<dyn Checkbox> {
        Box::new(LightCheckbox::default())
    }
}

pub struct DarkThemeFactory;

impl FamilyFactory for DarkThemeFactory {
    fn variant(&self) -> VariantKey {
        DARK.into()
    }
}

impl ThemeFactory for DarkThemeFactory {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(DarkButton)
    }

    fn create_checkbox(&self) -> Box<dyn Checkbox> {
        Box::new(DarkCheckbox::default())
    }
}

pub fn registry() -> Result<FactoryRegistry<dyn ThemeFactory>> {
    FactoryRegistry::new(FAMILY)
        .with(LIGHT, || -> Arc<dyn ThemeFactory> { Arc::new(LightThemeFactory) })?
        .with(DARK, || -> Arc<dyn ThemeFactory> { Arc::new(DarkThemeFactory) })
}

/// Paint a small form with widgets from one theme
pub fn render_form(factory: &dyn ThemeFactory) -> Vec<Rendition> {
    let button = factory.create_button();
    let mut checkbox = factory.create_checkbox();
    checkbox.toggle();
    vec![button.paint(), checkbox.paint()]
}
