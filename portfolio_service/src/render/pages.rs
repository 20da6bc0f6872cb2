//! maud templates for the public pages.
//!
//! Every page is wrapped in [`layout`], which receives the singleton profile
//! as ambient context independent of the route being rendered.

use crate::render::markdown::markdown_to_html;
use crate::render::text::prettify_key;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use models_portfolio::custom_fields::is_list;
use models_portfolio::{Education, Experience, Profile, Project};
use serde_json::Value;

/// Common chrome: head, navbar and footer built from the profile.
pub fn layout(profile: &Profile, page_title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (page_title) }
                @if let Some(favicon) = &profile.favicon {
                    link rel="icon" href=(favicon);
                }
            }
            body {
                nav {
                    a href="/" {
                        @if let Some(logo) = &profile.logo {
                            img.logo src=(logo) alt=(profile.name);
                        } @else {
                            span.name { (profile.name) }
                        }
                    }
                }
                main { (content) }
                footer {
                    a href={ "mailto:" (profile.email) } { (profile.email) }
                    @for (label, url) in profile.social_links() {
                        " "
                        a href=(url) rel="me" { (label) }
                    }
                }
            }
        }
    }
}

pub fn home_page(
    profile: &Profile,
    experiences: &[Experience],
    education: &[Education],
    projects: &[Project],
) -> Markup {
    let content = html! {
        section.hero {
            h1 { (profile.name) }
            p.title { (profile.title) }
            p.bio { (profile.bio) }
        }
        @if !experiences.is_empty() {
            section.experience {
                h2 { "Experience" }
                @for experience in experiences {
                    article {
                        h3 { (experience.position) " · " (experience.company) }
                        p.duration {
                            (experience.duration())
                            @if let Some(location) = &experience.location {
                                " · " (location)
                            }
                        }
                        div.description { (PreEscaped(markdown_to_html(&experience.description))) }
                    }
                }
            }
        }
        @if !education.is_empty() {
            section.education {
                h2 { "Education" }
                @for entry in education {
                    article {
                        h3 { (entry.degree) " · " (entry.institution) }
                        p.duration {
                            (entry.duration())
                            @if let Some(location) = &entry.location {
                                " · " (location)
                            }
                        }
                        @if let Some(description) = &entry.description {
                            div.description { (PreEscaped(markdown_to_html(description))) }
                        }
                    }
                }
            }
        }
        @if !projects.is_empty() {
            section.projects {
                h2 { "Projects" }
                @for project in projects {
                    article.card {
                        @if let Some(image) = &project.featured_image {
                            img src=(image) alt=(project.title);
                        }
                        h3 {
                            a href=(project.detail_path()) { (project.title) }
                        }
                        @if let Some(association) = &project.association {
                            p.association { (association) }
                        }
                    }
                }
            }
        }
    };

    layout(profile, &profile.name, content)
}

pub fn project_detail_page(profile: &Profile, project: &Project) -> Markup {
    let title = format!("{} · {}", project.title, profile.name);
    let content = html! {
        article.project {
            h1 { (project.title) }
            ul.meta {
                @if let Some(association) = &project.association {
                    li { strong { "Association: " } (association) }
                }
                @if let Some(time_frame) = &project.time_frame {
                    li { strong { "Time frame: " } (time_frame) }
                }
                @if let Some(role) = &project.role {
                    li { strong { "Role: " } (role) }
                }
            }
            @if let Some(image) = &project.featured_image {
                img.featured src=(image) alt=(project.title);
            }
            div.description { (PreEscaped(markdown_to_html(&project.description))) }
            @if !project.custom_fields.is_empty() {
                dl.custom-fields {
                    @for (key, value) in project.custom_fields.iter() {
                        dt { (prettify_key(key)) }
                        dd { (custom_field_value(value)) }
                    }
                }
            }
        }
    };

    layout(profile, &title, content)
}

/// Bag values render as a bullet list when they are a sequence and as a
/// single value otherwise.
fn custom_field_value(value: &Value) -> Markup {
    if is_list(value) {
        html! {
            ul {
                @for item in value.as_array().into_iter().flatten() {
                    li { (scalar_text(item)) }
                }
            }
        }
    } else {
        html! { (scalar_text(value)) }
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use models_portfolio::CustomFields;
    use models_portfolio::profile::PROFILE_ID;
    use serde_json::json;
    use sqlx::types::Json;
    use uuid::Uuid;

    fn make_profile() -> Profile {
        Profile {
            id: PROFILE_ID,
            name: "Ada Lovelace".to_string(),
            title: "Analyst".to_string(),
            bio: "First programmer.".to_string(),
            logo: None,
            favicon: None,
            email: "ada@example.com".to_string(),
            github_url: Some("https://github.com/ada".to_string()),
            linkedin_url: None,
            kaggle_url: None,
            twitter_url: None,
            updated_at: Utc::now(),
        }
    }

    fn make_project() -> Project {
        let mut fields = CustomFields::new();
        fields.set("technologies", json!(["Rust", "Postgres"]));
        fields.set("live_url", json!("https://example.com"));

        Project {
            id: Uuid::now_v7(),
            title: "Engine".to_string(),
            slug: "engine".to_string(),
            description: "# Overview\n\n- fast\n- small".to_string(),
            association: Some("Acme".to_string()),
            time_frame: None,
            role: None,
            featured_image: None,
            custom_fields: Json(fields),
            is_published: true,
            display_order: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_home_page_renders_hero_and_project_link() {
        let profile = make_profile();
        let experiences = vec![Experience {
            id: 1,
            company: "Acme".to_string(),
            position: "Engineer".to_string(),
            location: None,
            start_date: NaiveDate::from_ymd_opt(2020, 6, 1).unwrap(),
            end_date: None,
            is_current: true,
            description: "Did things".to_string(),
            display_order: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }];
        let projects = vec![make_project()];

        let html = home_page(&profile, &experiences, &[], &projects).into_string();

        assert!(html.contains("Ada Lovelace"));
        assert!(html.contains("Jun 2020 – Present"));
        assert!(html.contains(r#"href="/project/engine""#));
        assert!(html.contains("mailto:ada@example.com"));
    }

    #[test]
    fn test_detail_page_renders_markdown_and_bag() {
        let html = project_detail_page(&make_profile(), &make_project()).into_string();

        // markdown body converted
        assert!(html.contains("<h1>Overview</h1>"));
        // list-valued bag entry as bullet list, scalar as plain value
        assert!(html.contains("<dt>Technologies</dt>"));
        assert!(html.contains("<li>Rust</li>"));
        assert!(html.contains("<dt>Live Url</dt>"));
        assert!(html.contains("https://example.com"));
    }
}
