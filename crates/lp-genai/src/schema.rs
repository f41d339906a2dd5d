//! Response schemas sent as `generationConfig.responseSchema`.
//!
//! The enumerations are built from the content crate's closed sets so the
//! generator is never offered a value the schema types would reject.

use lp_content::{FontPairing, LayoutStyle, ProjectType, Tone};
use lp_renderer::Icon;
use serde_json::{Value, json};

fn string() -> Value {
    json!({ "type": "STRING" })
}

fn described(description: &str) -> Value {
    json!({ "type": "STRING", "description": description })
}

fn one_of(values: impl IntoIterator<Item = &'static str>) -> Value {
    json!({ "type": "STRING", "enum": values.into_iter().collect::<Vec<_>>() })
}

fn icons() -> Value {
    let mut icon = one_of(Icon::component_names());
    icon["description"] = json!("Lucide icon name");
    icon
}

fn array_of(items: Value) -> Value {
    json!({ "type": "ARRAY", "items": items })
}

fn layouts() -> Value {
    one_of(LayoutStyle::ALL.map(LayoutStyle::as_str))
}

/// Schema of an [`AnalysisResult`](lp_content::AnalysisResult).
pub(crate) fn analysis_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "projectName": described(
                "The EXACT Project Name. Maximum 2 words. e.g. 'PunchClock', 'React'. NO slogans."
            ),
            "projectType": one_of(ProjectType::ALL.map(ProjectType::as_str)),
            "targetAudience": string(),
            "tone": one_of(Tone::ALL.map(Tone::as_str)),
            "keyBenefits": array_of(string()),
            "suggestedColor": described("Hex code only."),
            "suggestedLayout": layouts(),
        },
        "required": [
            "projectName", "projectType", "targetAudience", "tone",
            "keyBenefits", "suggestedColor", "suggestedLayout",
        ],
    })
}

/// Schema of a [`ContentDocument`](lp_content::ContentDocument) without stats.
pub(crate) fn landing_page_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "meta": {
                "type": "OBJECT",
                "properties": {
                    "brandName": described("Short UI name. Max 20 chars. e.g. 'PUNCHCLOCK'"),
                    "title": described("SEO Title. Max 60 chars."),
                    "description": described("SEO Description. Max 160 chars."),
                    "themeColor": string(),
                    "fontPairing": one_of(FontPairing::ALL.map(FontPairing::as_str)),
                    "layoutStyle": layouts(),
                },
            },
            "hero": {
                "type": "OBJECT",
                "properties": {
                    "headline": described(
                        "Punchy, modern headline. Max 8 words. e.g. 'Build faster, scale sooner.'"
                    ),
                    "subheadline": described("Short description. Max 20 words."),
                    "ctaPrimary": described("Action button text."),
                    "ctaSecondary": string(),
                    "imagePrompt": described(
                        "Abstract 3D tech visualization, isometric, glassmorphism style. No text."
                    ),
                },
            },
            "problemSolution": {
                "type": "OBJECT",
                "properties": {
                    "problemTitle": string(),
                    "problemDescription": string(),
                    "solutionTitle": string(),
                    "solutionDescription": string(),
                },
            },
            "features": array_of(json!({
                "type": "OBJECT",
                "properties": {
                    "title": string(),
                    "description": string(),
                    "icon": icons(),
                },
            })),
            "socialProof": {
                "type": "OBJECT",
                "properties": {
                    "stat": string(),
                    "statLabel": string(),
                    "testimonial": string(),
                    "testimonialAuthor": string(),
                },
            },
            "pricing": array_of(json!({
                "type": "OBJECT",
                "properties": {
                    "planName": string(),
                    "price": string(),
                    "features": array_of(string()),
                    "isPopular": { "type": "BOOLEAN" },
                },
            })),
            "faq": array_of(json!({
                "type": "OBJECT",
                "properties": {
                    "question": string(),
                    "answer": string(),
                },
            })),
        },
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_analysis_schema_requires_every_field() {
        let schema = analysis_schema();
        let properties = schema["properties"].as_object().unwrap();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(Value::as_str)
            .collect();

        assert_eq!(required.len(), properties.len());
        assert!(required.iter().all(|name| properties.contains_key(*name)));
        assert_eq!(
            schema["properties"]["suggestedLayout"]["enum"],
            json!(["modern-saas", "developer-tool"])
        );
    }

    #[test]
    fn test_landing_page_schema_enums() {
        let schema = landing_page_schema();
        assert_eq!(
            schema["properties"]["meta"]["properties"]["fontPairing"]["enum"],
            json!(["sans", "serif", "mono"])
        );
        assert_eq!(
            schema["properties"]["pricing"]["items"]["properties"]["isPopular"]["type"],
            "BOOLEAN"
        );
        assert!(schema["properties"].get("githubStats").is_none());
    }

    #[test]
    fn test_feature_icons_are_all_renderable() {
        let schema = landing_page_schema();
        let allowed = schema["properties"]["features"]["items"]["properties"]["icon"]["enum"]
            .as_array()
            .unwrap();

        assert!(allowed.len() > 100);
        for name in allowed.iter().filter_map(Value::as_str) {
            assert_eq!(Icon::resolve(name).component_name(), name);
        }
    }
}
