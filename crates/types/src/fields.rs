//! Form-builder input fields.
//!
//! Custom section and block types describe their config with a list of
//! [`InputField`]s. The same definitions drive custom post fields and form
//! inputs. Every field kind shares [`BaseInputField`] and narrows the type of
//! its `defaultValue`. Keys are camelCase on the wire.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::responsive::{ColorReference, ContainerBehavior};
use crate::schema::{BlockTarget, SchemaInstance};

/// What a conditional rule toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleType {
    VisibleWhen,
    DisabledWhen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionOperator {
    Equals,
    NotEquals,
    Contains,
    NotContains,
    StartsWith,
    EndsWith,
    GreaterThan,
    LessThan,
    GreaterThanOrEqual,
    LessThanOrEqual,
    Between,
    IsEmpty,
    IsNotEmpty,
    IsChecked,
    IsNotChecked,
    Includes,
    NotIncludes,
    IncludesAll,
    IncludesAny,
}

/// Show/hide or enable/disable a field based on another field's value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    #[serde(rename = "type")]
    pub rule_type: RuleType,
    /// Id of the field being tested.
    pub field: String,
    pub operator: ConditionOperator,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationRuleType {
    Min,
    Max,
    Pattern,
    Custom,
}

/// A bound or pattern used by a validation rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ValidationValue {
    Number(f64),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationRule {
    #[serde(rename = "type")]
    pub rule_type: ValidationRuleType,
    pub value: ValidationValue,
    pub message: String,
}

/// Properties shared by every input field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BaseInputField {
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    /// Accepts a value per breakpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsive: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<Vec<ValidationRule>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<Rule>>,
    /// UI grouping only; does not affect the stored config shape.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

impl BaseInputField {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextInputField {
    #[serde(flatten)]
    pub base: BaseInputField,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextareaInputField {
    #[serde(flatten)]
    pub base: BaseInputField,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberInputField {
    #[serde(flatten)]
    pub base: BaseInputField,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BooleanInputField {
    #[serde(flatten)]
    pub base: BaseInputField,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectInputField {
    #[serde(flatten)]
    pub base: BaseInputField,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    pub options: Vec<SelectOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiple: Option<bool>,
}

/// Stores a hex color (picked from the theme or entered directly).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorInputField {
    #[serde(flatten)]
    pub base: BaseInputField,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

/// Stores a [`ColorReference`]. Used by the `theme-color`,
/// `theme-background-color`, and `theme-foreground-color` kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColorInputField {
    #[serde(flatten)]
    pub base: BaseInputField,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<ColorReference>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageInputField {
    #[serde(flatten)]
    pub base: BaseInputField,
    /// Image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    /// Accepted MIME types, e.g. `"image/*"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accept: Option<String>,
    /// Bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_size: Option<u64>,
}

/// Free text with a placeholder. Used by `markdown`, `html`, `url`,
/// `css-value`, and `spacing`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceholderInputField {
    #[serde(flatten)]
    pub base: BaseInputField,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RichTextFormat {
    Html,
    Markdown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RichTextInputField {
    #[serde(flatten)]
    pub base: BaseInputField,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<RichTextFormat>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedTextInputField {
    #[serde(flatten)]
    pub base: BaseInputField,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<BTreeMap<String, String>>,
    pub supported_locales: Vec<String>,
}

/// Repeated items, each described by `fields`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrayInputField {
    #[serde(flatten)]
    pub base: BaseInputField,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Vec<Value>>,
    /// Label for a single item, e.g. "Team Member".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_label: Option<String>,
    pub fields: Vec<InputField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_items: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_items: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectInputField {
    #[serde(flatten)]
    pub base: BaseInputField,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Map<String, Value>>,
    pub properties: Vec<InputField>,
}

/// Like an object field, but only groups fields visually.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupInputField {
    #[serde(flatten)]
    pub base: BaseInputField,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Map<String, Value>>,
    pub fields: Vec<InputField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapsible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapsed_by_default: Option<bool>,
}

/// ISO date strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateInputField {
    #[serde(flatten)]
    pub base: BaseInputField,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonInputField {
    #[serde(flatten)]
    pub base: BaseInputField,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeLanguage {
    Json,
    Javascript,
    Typescript,
    Html,
    Css,
    Markdown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeInputField {
    #[serde(flatten)]
    pub base: BaseInputField,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<CodeLanguage>,
    /// Editor height, e.g. `"400px"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
}

/// A nested list of blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlocksInputField {
    #[serde(flatten)]
    pub base: BaseInputField,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Vec<SchemaInstance>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_blocks: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_blocks: Option<u32>,
    /// When set, only these block types may be added.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_block_types: Option<Vec<String>>,
    /// When set, only blocks available in these contexts may be added.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_targets: Option<Vec<BlockTarget>>,
}

/// Picks a form page id, or `"next"` / `"prev"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormPageInputField {
    #[serde(flatten)]
    pub base: BaseInputField,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
}

/// Responsive grid column counts, keyed by breakpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridColumnsInputField {
    #[serde(flatten)]
    pub base: BaseInputField,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerBehaviorInputField {
    #[serde(flatten)]
    pub base: BaseInputField,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<ContainerBehavior>,
}

/// Any input field, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum InputField {
    Text(TextInputField),
    Textarea(TextareaInputField),
    Number(NumberInputField),
    Boolean(BooleanInputField),
    Select(SelectInputField),
    Color(ColorInputField),
    ThemeColor(ThemeColorInputField),
    ThemeBackgroundColor(ThemeColorInputField),
    ThemeForegroundColor(ThemeColorInputField),
    Image(ImageInputField),
    Markdown(PlaceholderInputField),
    Html(PlaceholderInputField),
    #[serde(rename = "richtext")]
    RichText(RichTextInputField),
    LocalizedText(LocalizedTextInputField),
    Array(ArrayInputField),
    Object(ObjectInputField),
    Group(GroupInputField),
    Date(DateInputField),
    Json(JsonInputField),
    Url(PlaceholderInputField),
    Code(CodeInputField),
    Blocks(BlocksInputField),
    FormPage(FormPageInputField),
    /// Picks a form id.
    FormSelector(PlaceholderInputField),
    #[serde(rename = "columns")]
    GridColumns(GridColumnsInputField),
    CssValue(PlaceholderInputField),
    /// `"1rem"` or per-side `"1rem 2rem 3rem 4rem"`.
    Spacing(PlaceholderInputField),
    ContainerBehavior(ContainerBehaviorInputField),
}

impl InputField {
    /// Shared properties of this field.
    pub fn base(&self) -> &BaseInputField {
        match self {
            Self::Text(f) => &f.base,
            Self::Textarea(f) => &f.base,
            Self::Number(f) => &f.base,
            Self::Boolean(f) => &f.base,
            Self::Select(f) => &f.base,
            Self::Color(f) => &f.base,
            Self::ThemeColor(f) | Self::ThemeBackgroundColor(f) | Self::ThemeForegroundColor(f) => {
                &f.base
            }
            Self::Image(f) => &f.base,
            Self::Markdown(f)
            | Self::Html(f)
            | Self::Url(f)
            | Self::FormSelector(f)
            | Self::CssValue(f)
            | Self::Spacing(f) => &f.base,
            Self::RichText(f) => &f.base,
            Self::LocalizedText(f) => &f.base,
            Self::Array(f) => &f.base,
            Self::Object(f) => &f.base,
            Self::Group(f) => &f.base,
            Self::Date(f) => &f.base,
            Self::Json(f) => &f.base,
            Self::Code(f) => &f.base,
            Self::Blocks(f) => &f.base,
            Self::FormPage(f) => &f.base,
            Self::GridColumns(f) => &f.base,
            Self::ContainerBehavior(f) => &f.base,
        }
    }

    /// The field's `type` discriminator.
    pub fn field_type(&self) -> InputFieldType {
        match self {
            Self::Text(_) => InputFieldType::Text,
            Self::Textarea(_) => InputFieldType::Textarea,
            Self::Number(_) => InputFieldType::Number,
            Self::Boolean(_) => InputFieldType::Boolean,
            Self::Select(_) => InputFieldType::Select,
            Self::Color(_) => InputFieldType::Color,
            Self::ThemeColor(_) => InputFieldType::ThemeColor,
            Self::ThemeBackgroundColor(_) => InputFieldType::ThemeBackgroundColor,
            Self::ThemeForegroundColor(_) => InputFieldType::ThemeForegroundColor,
            Self::Image(_) => InputFieldType::Image,
            Self::Markdown(_) => InputFieldType::Markdown,
            Self::Html(_) => InputFieldType::Html,
            Self::RichText(_) => InputFieldType::RichText,
            Self::LocalizedText(_) => InputFieldType::LocalizedText,
            Self::Array(_) => InputFieldType::Array,
            Self::Object(_) => InputFieldType::Object,
            Self::Group(_) => InputFieldType::Group,
            Self::Date(_) => InputFieldType::Date,
            Self::Json(_) => InputFieldType::Json,
            Self::Url(_) => InputFieldType::Url,
            Self::Code(_) => InputFieldType::Code,
            Self::Blocks(_) => InputFieldType::Blocks,
            Self::FormPage(_) => InputFieldType::FormPage,
            Self::FormSelector(_) => InputFieldType::FormSelector,
            Self::GridColumns(_) => InputFieldType::GridColumns,
            Self::CssValue(_) => InputFieldType::CssValue,
            Self::Spacing(_) => InputFieldType::Spacing,
            Self::ContainerBehavior(_) => InputFieldType::ContainerBehavior,
        }
    }

    /// Directly nested fields (array items, object properties, group members).
    pub fn children(&self) -> &[InputField] {
        match self {
            Self::Array(f) => &f.fields,
            Self::Object(f) => &f.properties,
            Self::Group(f) => &f.fields,
            _ => &[],
        }
    }
}

/// The `type` discriminator of an [`InputField`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputFieldType {
    Text,
    Textarea,
    Number,
    Boolean,
    Select,
    Color,
    ThemeColor,
    ThemeBackgroundColor,
    ThemeForegroundColor,
    Image,
    Markdown,
    Html,
    #[serde(rename = "richtext")]
    RichText,
    LocalizedText,
    Array,
    Object,
    Group,
    Date,
    Json,
    Url,
    Code,
    Blocks,
    FormPage,
    FormSelector,
    #[serde(rename = "columns")]
    GridColumns,
    CssValue,
    Spacing,
    ContainerBehavior,
}

impl InputFieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Textarea => "textarea",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Select => "select",
            Self::Color => "color",
            Self::ThemeColor => "theme-color",
            Self::ThemeBackgroundColor => "theme-background-color",
            Self::ThemeForegroundColor => "theme-foreground-color",
            Self::Image => "image",
            Self::Markdown => "markdown",
            Self::Html => "html",
            Self::RichText => "richtext",
            Self::LocalizedText => "localized-text",
            Self::Array => "array",
            Self::Object => "object",
            Self::Group => "group",
            Self::Date => "date",
            Self::Json => "json",
            Self::Url => "url",
            Self::Code => "code",
            Self::Blocks => "blocks",
            Self::FormPage => "form-page",
            Self::FormSelector => "form-selector",
            Self::GridColumns => "columns",
            Self::CssValue => "css-value",
            Self::Spacing => "spacing",
            Self::ContainerBehavior => "container-behavior",
        }
    }
}

impl std::fmt::Display for InputFieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
