//! Template Renderer — pure mapping from `(ResumeData, Template)` to a
//! self-contained HTML fragment.
//!
//! No I/O and no side effects; the output is a single `<div>` block the
//! orchestrator stages for rasterization. All layout variation is driven by
//! the template's enumerated style knobs (`HeaderLayout`, `SectionStyle`,
//! `BorderStyle`, alignment, weight, separator) — never by template identity.
//!
//! Section order is fixed: Summary → Education → Skills → Experience/Projects
//! → Achievements. Empty sections are omitted entirely, except
//! Experience/Projects which always renders (placeholder when empty).

use crate::errors::ExportError;
use crate::form::ResumeData;
use crate::templates::{self, BorderStyle, HeaderAlign, HeaderLayout, SectionStyle, Template};

/// Literal rendered in the name slot when the collected name is empty.
pub const NAME_PLACEHOLDER: &str = "Your Name";

/// Literal rendered in the Experience section when no experience title exists.
pub const NO_EXPERIENCE: &str = "No experience listed";

/// Renders the resume as an HTML fragment honoring the template's style
/// parameters. Fails with `InvalidTemplate` if `template` is not the registry
/// entry for its id; never fails for well-formed inputs.
pub fn render(data: &ResumeData, template: &Template) -> Result<String, ExportError> {
    if templates::get(template.id) != template {
        return Err(ExportError::InvalidTemplate(template.id));
    }

    let t = template;
    let border_css = match t.border_style {
        BorderStyle::None => String::new(),
        BorderStyle::Left => format!("border-left:4px solid {};", t.accent_color),
        BorderStyle::Full => "border:1px solid #ccc;".to_string(),
        BorderStyle::Top => format!("border-top:4px solid {};", t.accent_color),
    };

    // Banner layouts pull the body padding inside an inner wrapper so the
    // gradient can bleed to the block edges.
    let (body_padding, inner_padding) = match t.header_layout {
        HeaderLayout::Banner => ("0", "20px 28px 28px"),
        _ => ("28px", "0"),
    };

    let mut out = String::with_capacity(2048);
    out.push_str(&format!(
        "<div style=\"font-family:{};max-width:700px;margin:0 auto;background:#fff;\
         color:#333;padding:{};{}font-size:13px;line-height:1.6;\">",
        t.font_family, body_padding, border_css
    ));
    out.push_str(&header_html(data, t));
    out.push_str(&format!("<div style=\"padding:{};\">", inner_padding));

    if !data.summary.is_empty() {
        out.push_str(&section_heading(t, "Professional Summary"));
        out.push_str(&format!(
            "<p style=\"margin:0;font-size:13px;line-height:1.6;\">{}</p>",
            escape(&data.summary)
        ));
    }

    let education = education_line(data);
    if !education.is_empty() {
        out.push_str(&section_heading(t, "Education"));
        out.push_str(&format!("<p style=\"margin:0;font-size:13px;\">{education}</p>"));
    }

    if !data.skills.is_empty() {
        out.push_str(&section_heading(t, "Skills"));
        out.push_str(&format!(
            "<div style=\"margin-top:4px;\">{}</div>",
            skills_html(data, t)
        ));
    }

    // Experience always renders, placeholder included.
    out.push_str(&section_heading(t, "Experience / Projects"));
    out.push_str(&experience_html(data, t));

    if !data.achievements.is_empty() {
        out.push_str(&section_heading(t, "Achievements / Certifications"));
        out.push_str(&format!(
            "<p style=\"margin:0;font-size:13px;line-height:1.6;\">{}</p>",
            escape(&data.achievements)
        ));
    }

    out.push_str("</div></div>");
    Ok(out)
}

// ────────────────────────────────────────────────────────────────────────────
// Header block
// ────────────────────────────────────────────────────────────────────────────

fn header_html(data: &ResumeData, t: &Template) -> String {
    let name = if data.name.is_empty() {
        NAME_PLACEHOLDER.to_string()
    } else {
        escape(&data.name)
    };
    let contact = contact_line(data, t.contact_separator);
    let name_size = match t.header_layout {
        HeaderLayout::Plain => 28,
        _ => 26,
    };

    match t.header_layout {
        HeaderLayout::Banner => {
            let linkedin = if data.linkedin.is_empty() {
                String::new()
            } else {
                format!(
                    "<p style=\"font-size:12px;margin:4px 0 0;opacity:0.85;color:#fff;\">{}</p>",
                    escape(&data.linkedin)
                )
            };
            format!(
                "<div style=\"background:linear-gradient(135deg,{accent},{accent}cc);\
                 padding:24px 28px;color:#fff;border-radius:6px 6px 0 0;\">\
                 <h1 style=\"font-family:{font};font-size:{name_size}px;margin:0 0 6px 0;\
                 color:#fff;font-weight:{weight};\">{name}</h1>\
                 <p style=\"font-size:12px;margin:0;opacity:0.9;color:#fff;\">{contact}</p>\
                 {linkedin}</div>",
                accent = t.accent_color,
                font = t.font_family,
                weight = t.name_weight,
            )
        }
        HeaderLayout::Ruled => {
            // Centered ruled headers (professional) set the contact line in
            // italics; left-aligned ones (modern) keep it regular.
            let contact_style = match t.header_align {
                HeaderAlign::Center => "font-size:12px;color:#666;font-style:italic;",
                HeaderAlign::Left => "font-size:12px;color:#666;margin:0;",
            };
            let linkedin = if data.linkedin.is_empty() {
                String::new()
            } else {
                format!(
                    "<p style=\"font-size:12px;color:#666;margin:2px 0 0;\">{}</p>",
                    escape(&data.linkedin)
                )
            };
            format!(
                "<div style=\"text-align:{align};padding-bottom:14px;\
                 border-bottom:2px solid {accent};margin-bottom:14px;\">\
                 <h1 style=\"font-family:{font};font-size:{name_size}px;margin:0 0 6px 0;\
                 color:{accent};font-weight:{weight};\">{name}</h1>\
                 <p style=\"{contact_style}\">{contact}</p>\
                 {linkedin}</div>",
                align = t.header_align.css(),
                accent = t.accent_color,
                font = t.font_family,
                weight = t.name_weight,
            )
        }
        HeaderLayout::Plain => {
            let linkedin = if data.linkedin.is_empty() {
                String::new()
            } else {
                format!(
                    "<p style=\"font-size:11px;color:#888;margin:2px 0 0;\">{}</p>",
                    escape(&data.linkedin)
                )
            };
            format!(
                "<div style=\"margin-bottom:14px;\">\
                 <h1 style=\"font-family:{font};font-size:{name_size}px;margin:0 0 4px 0;\
                 color:{accent};font-weight:{weight};\">{name}</h1>\
                 <p style=\"font-size:11px;color:#888;margin:0;\">{contact}</p>\
                 {linkedin}</div>",
                font = t.font_family,
                accent = t.accent_color,
                weight = t.name_weight,
            )
        }
    }
}

/// Joins the non-empty contact fields (email, phone, location — fixed order)
/// with the template separator. Empty fields are dropped from the join.
fn contact_line(data: &ResumeData, separator: &str) -> String {
    [&data.email, &data.phone, &data.location]
        .iter()
        .filter(|v| !v.is_empty())
        .map(|v| escape(v))
        .collect::<Vec<_>>()
        .join(separator)
}

// ────────────────────────────────────────────────────────────────────────────
// Sections
// ────────────────────────────────────────────────────────────────────────────

/// One heading per `SectionStyle`. Style never alters section content or order.
fn section_heading(t: &Template, title: &str) -> String {
    match t.section_style {
        SectionStyle::Uppercase => format!(
            "<h2 style=\"font-family:{font};font-size:13px;text-transform:uppercase;\
             letter-spacing:2px;color:{accent};margin:18px 0 6px 0;padding-bottom:4px;\
             border-bottom:1px solid {accent};\">{title}</h2>",
            font = t.font_family,
            accent = t.accent_color,
        ),
        SectionStyle::Colored => format!(
            "<h2 style=\"font-family:{font};font-size:14px;color:#fff;background:{accent};\
             display:inline-block;padding:3px 14px;border-radius:4px;margin:18px 0 8px 0;\">\
             {title}</h2>",
            font = t.font_family,
            accent = t.accent_color,
        ),
        SectionStyle::Clean => format!(
            "<h2 style=\"font-family:{font};font-size:14px;color:{accent};margin:18px 0 6px 0;\
             font-weight:400;\">{title}</h2>",
            font = t.font_family,
            accent = t.accent_color,
        ),
        SectionStyle::Underline => format!(
            "<h2 style=\"font-family:{font};font-size:14px;color:{accent};margin:18px 0 6px 0;\
             padding-bottom:4px;border-bottom:2px solid {accent};\">{title}</h2>",
            font = t.font_family,
            accent = t.accent_color,
        ),
    }
}

/// Education line: degree, "from {institution}", "({year})", "— CGPA: {cgpa}",
/// each only when non-empty, single-space joined, fixed order.
fn education_line(data: &ResumeData) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(4);
    if !data.degree.is_empty() {
        parts.push(escape(&data.degree));
    }
    if !data.institution.is_empty() {
        parts.push(format!("from {}", escape(&data.institution)));
    }
    if !data.year.is_empty() {
        parts.push(format!("({})", escape(&data.year)));
    }
    if !data.cgpa.is_empty() {
        parts.push(format!("— CGPA: {}", escape(&data.cgpa)));
    }
    parts.join(" ")
}

/// Inline pill tokens, one per skill, input order preserved.
fn skills_html(data: &ResumeData, t: &Template) -> String {
    data.skills
        .iter()
        .map(|s| {
            format!(
                "<span style=\"display:inline-block;background:{accent}15;color:{accent};\
                 padding:3px 10px;border-radius:12px;font-size:11px;margin:2px 4px 2px 0;\
                 font-weight:500;\">{}</span>",
                escape(s),
                accent = t.accent_color,
            )
        })
        .collect()
}

fn experience_html(data: &ResumeData, t: &Template) -> String {
    if data.exp_title.is_empty() {
        return format!("<p style=\"color:#999;font-style:italic;\">{NO_EXPERIENCE}</p>");
    }

    let org = if data.exp_org.is_empty() {
        String::new()
    } else {
        format!(" at {}", escape(&data.exp_org))
    };
    let mut out = format!(
        "<p style=\"margin:4px 0 2px 0;\"><strong style=\"color:{};\">{}</strong>{org}</p>",
        t.accent_color,
        escape(&data.exp_title),
    );
    if !data.exp_duration.is_empty() {
        out.push_str(&format!(
            "<p style=\"margin:0 0 2px 0;font-size:12px;color:#888;\">{}</p>",
            escape(&data.exp_duration)
        ));
    }
    if !data.exp_desc.is_empty() {
        out.push_str(&format!(
            "<p style=\"margin:0;font-size:13px;line-height:1.5;\">{}</p>",
            escape(&data.exp_desc)
        ));
    }
    out
}

// ────────────────────────────────────────────────────────────────────────────
// Escaping
// ────────────────────────────────────────────────────────────────────────────

/// Minimal HTML escape for user-supplied text interpolated into the fragment.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::{get, TemplateId};

    fn sample_data() -> ResumeData {
        ResumeData {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            phone: "555-0100".into(),
            location: "Lisbon".into(),
            linkedin: "linkedin.com/in/janedoe".into(),
            summary: "Systems engineer.".into(),
            degree: "BSc Computer Science".into(),
            institution: "IST".into(),
            year: "2021".into(),
            cgpa: "9.1".into(),
            skills: vec!["Rust".into(), "SQL".into()],
            exp_title: "Backend Engineer".into(),
            exp_org: "Acme".into(),
            exp_duration: "2021–2024".into(),
            exp_desc: "Built billing pipelines.".into(),
            achievements: "Speaker at RustConf.".into(),
        }
    }

    #[test]
    fn test_name_renders_for_all_templates() {
        let data = sample_data();
        for id in TemplateId::ALL {
            let html = render(&data, get(id)).unwrap();
            assert!(html.contains("Jane Doe"), "{id} missing name");
        }
    }

    #[test]
    fn test_empty_name_renders_placeholder_for_all_templates() {
        let data = ResumeData::default();
        for id in TemplateId::ALL {
            let html = render(&data, get(id)).unwrap();
            assert!(html.contains(NAME_PLACEHOLDER), "{id} missing placeholder");
        }
    }

    #[test]
    fn test_invalid_template_rejected_before_rendering() {
        let mut rogue = *get(TemplateId::Modern);
        rogue.accent_color = "#ff0000";
        let err = render(&ResumeData::default(), &rogue).unwrap_err();
        assert!(matches!(err, ExportError::InvalidTemplate(TemplateId::Modern)));
    }

    #[test]
    fn test_empty_skills_omits_heading() {
        let mut data = sample_data();
        data.skills.clear();
        let html = render(&data, get(TemplateId::Modern)).unwrap();
        assert!(!html.contains(">Skills<"));
    }

    #[test]
    fn test_skills_render_one_token_each_in_order() {
        let mut data = sample_data();
        data.skills = vec!["Alpha".into(), "Beta".into(), "Alpha".into()];
        let html = render(&data, get(TemplateId::Minimal)).unwrap();
        assert_eq!(html.matches("border-radius:12px").count(), 3);
        let a = html.find(">Alpha<").unwrap();
        let b = html.find(">Beta<").unwrap();
        assert!(a < b, "skill order not preserved");
    }

    #[test]
    fn test_experience_placeholder_when_title_empty() {
        let mut data = sample_data();
        data.exp_title.clear();
        let html = render(&data, get(TemplateId::Modern)).unwrap();
        assert!(html.contains(NO_EXPERIENCE));
        // Section heading still present even with no data.
        assert!(html.contains("Experience / Projects"));
    }

    #[test]
    fn test_experience_fields_render_when_present() {
        let html = render(&sample_data(), get(TemplateId::Modern)).unwrap();
        assert!(html.contains("Backend Engineer"));
        assert!(html.contains(" at Acme"));
        assert!(html.contains("2021–2024"));
        assert!(html.contains("Built billing pipelines."));
        assert!(!html.contains(NO_EXPERIENCE));
    }

    #[test]
    fn test_contact_line_omits_empty_fields_from_join() {
        let mut data = sample_data();
        data.phone.clear();
        let html = render(&data, get(TemplateId::Professional)).unwrap();
        assert!(html.contains("jane@example.com | Lisbon"));
    }

    #[test]
    fn test_linkedin_renders_as_separate_line_when_present() {
        let data = sample_data();
        let html = render(&data, get(TemplateId::Minimal)).unwrap();
        assert!(html.contains("linkedin.com/in/janedoe"));

        let mut without = data;
        without.linkedin.clear();
        let html = render(&without, get(TemplateId::Minimal)).unwrap();
        assert!(!html.contains("linkedin.com"));
    }

    #[test]
    fn test_education_line_composition_and_order() {
        let html = render(&sample_data(), get(TemplateId::Modern)).unwrap();
        assert!(html.contains("BSc Computer Science from IST (2021) — CGPA: 9.1"));
    }

    #[test]
    fn test_education_section_omitted_when_all_fields_empty() {
        let mut data = sample_data();
        data.degree.clear();
        data.institution.clear();
        data.year.clear();
        data.cgpa.clear();
        let html = render(&data, get(TemplateId::Modern)).unwrap();
        assert!(!html.contains(">Education<"));
    }

    #[test]
    fn test_summary_and_achievements_omitted_when_empty() {
        let mut data = sample_data();
        data.summary.clear();
        data.achievements.clear();
        let html = render(&data, get(TemplateId::Creative)).unwrap();
        assert!(!html.contains("Professional Summary"));
        assert!(!html.contains("Achievements / Certifications"));
    }

    #[test]
    fn test_section_order_is_fixed() {
        let html = render(&sample_data(), get(TemplateId::Professional)).unwrap();
        let positions: Vec<usize> = [
            "Professional Summary",
            ">Education<",
            ">Skills<",
            "Experience / Projects",
            "Achievements / Certifications",
        ]
        .iter()
        .map(|needle| html.find(needle).unwrap())
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_professional_scenario_markers() {
        // {name: "Jane Doe", skills: [JavaScript, React], expTitle: ""}
        let data = ResumeData {
            name: "Jane Doe".into(),
            skills: vec!["JavaScript".into(), "React".into()],
            ..ResumeData::default()
        };
        let html = render(&data, get(TemplateId::Professional)).unwrap();
        assert!(html.contains("Jane Doe"));
        assert!(html.contains("text-align:center"));
        assert!(html.contains("text-transform:uppercase"));
        assert!(html.contains(NO_EXPERIENCE));
    }

    #[test]
    fn test_border_styles_per_template() {
        let modern = render(&sample_data(), get(TemplateId::Modern)).unwrap();
        assert!(modern.contains("border-left:4px solid #007bff"));

        let minimal = render(&sample_data(), get(TemplateId::Minimal)).unwrap();
        assert!(!minimal.contains("border-left:"));
        assert!(!minimal.contains("border-top:"));

        let professional = render(&sample_data(), get(TemplateId::Professional)).unwrap();
        assert!(professional.contains("border:1px solid #ccc"));

        let creative = render(&sample_data(), get(TemplateId::Creative)).unwrap();
        assert!(creative.contains("border-top:4px solid #6c5ce7"));
    }

    #[test]
    fn test_creative_renders_gradient_banner() {
        let html = render(&sample_data(), get(TemplateId::Creative)).unwrap();
        assert!(html.contains("linear-gradient(135deg,#6c5ce7,#6c5ce7cc)"));
        // Banner layout moves body padding into the inner wrapper.
        assert!(html.contains("padding:0;"));
        assert!(html.contains("padding:20px 28px 28px;"));
    }

    #[test]
    fn test_minimal_uses_thin_large_name_heading() {
        let html = render(&sample_data(), get(TemplateId::Minimal)).unwrap();
        assert!(html.contains("font-weight:300"));
        assert!(html.contains("font-size:28px"));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let mut data = sample_data();
        data.name = "Jane <script>alert(1)</script>".into();
        data.summary = "Ops & SRE".into();
        let html = render(&data, get(TemplateId::Modern)).unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("Jane &lt;script&gt;"));
        assert!(html.contains("Ops &amp; SRE"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let a = render(&sample_data(), get(TemplateId::Creative)).unwrap();
        let b = render(&sample_data(), get(TemplateId::Creative)).unwrap();
        assert_eq!(a, b);
    }
}
