//! Pretty output formatting.

use std::borrow::Borrow;

use notify_admin_core::folders::FolderNode;
use notify_admin_core::models::{Template, TemplateUsage};

/// Format one folder node, indented by its depth.
pub fn format_folder(node: &FolderNode) -> String {
    let mut output = format!(
        "{}{}  [{} templates, {} folders]\n{}  ID: {}",
        "  ".repeat(node.depth),
        node.display_name,
        node.template_count,
        node.folder_count,
        "  ".repeat(node.depth),
        node.id
    );
    if node.display_name.is_collapsed() {
        output.push_str(" (parents hidden)");
    }
    output
}

/// Format a folder tree in display order.
pub fn format_folders(nodes: &[FolderNode]) -> String {
    if nodes.is_empty() {
        return "No folders found.".to_string();
    }
    let mut output = format!("FOLDERS ({})\n", nodes.len());
    output.push_str(&"-".repeat(40));
    for node in nodes {
        output.push_str(&format!("\n{}", format_folder(node)));
    }
    output
}

/// Format a template for display.
pub fn format_template(template: &Template) -> String {
    let mut output = format!(
        "{} [{}] v{}\n  ID: {}",
        template.name,
        template.template_type.as_str(),
        template.version,
        template.id
    );
    if let Some(folder_id) = template.folder_id {
        output.push_str(&format!("\n  Folder: {}", folder_id));
    }
    if let Some(subject) = &template.subject {
        output.push_str(&format!("\n  Subject: {}", subject));
    }
    if template.archived {
        output.push_str("\n  Archived");
    }
    output
}

/// Format templates for display.
pub fn format_templates<T: Borrow<Template>>(templates: &[T]) -> String {
    if templates.is_empty() {
        return "No templates found.".to_string();
    }
    let mut output = format!("TEMPLATES ({})\n", templates.len());
    output.push_str(&"-".repeat(40));
    for template in templates {
        output.push_str(&format!("\n{}", format_template(template.borrow())));
        output.push('\n');
    }
    output
}

/// Format template usage, most used first.
pub fn format_usage(usage: &[TemplateUsage]) -> String {
    if usage.is_empty() {
        return "No templates sent.".to_string();
    }
    let mut rows: Vec<&TemplateUsage> = usage.iter().collect();
    rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.template_name.cmp(&b.template_name)));

    let mut output = format!("USAGE ({})\n", rows.len());
    output.push_str(&"-".repeat(40));
    for row in rows {
        output.push_str(&format!(
            "\n{:>8}  {} [{}]",
            row.count,
            row.template_name,
            row.template_type.as_str()
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify_admin_core::folders::{build_folder_nodes, Viewer};
    use notify_admin_core::models::{TemplateFolder, TemplateType};
    use uuid::Uuid;

    #[test]
    fn test_format_folders_indents_by_depth() {
        let parent = TemplateFolder::new("Letters");
        let child = TemplateFolder::new("Reminders").with_parent(parent.id);
        let nodes = build_folder_nodes(&[parent, child], &[], Viewer::Administrator);

        let output = format_folders(&nodes);

        assert!(output.starts_with("FOLDERS (2)\n"));
        assert!(output.contains("\nLetters  [0 templates, 1 folders]"));
        assert!(output.contains("\n  Reminders  [0 templates, 0 folders]"));
    }

    #[test]
    fn test_format_folders_marks_collapsed_names() {
        let user = Uuid::new_v4();
        let parent = TemplateFolder::new("Hidden");
        let child = TemplateFolder::new("Shared")
            .with_parent(parent.id)
            .with_user(user);
        let nodes = build_folder_nodes(&[parent, child], &[], Viewer::User(user));

        let output = format_folders(&nodes);

        assert!(output.contains("Hidden / Shared"));
        assert!(output.contains("(parents hidden)"));
    }

    #[test]
    fn test_format_empty_lists() {
        assert_eq!(format_folders(&[]), "No folders found.");
        assert_eq!(format_templates::<Template>(&[]), "No templates found.");
        assert_eq!(format_usage(&[]), "No templates sent.");
    }

    #[test]
    fn test_format_template() {
        let template = Template::new("Welcome", TemplateType::Email).with_subject("Hello");
        let output = format_template(&template);

        assert!(output.starts_with("Welcome [email] v"));
        assert!(output.contains("Subject: Hello"));
    }

    #[test]
    fn test_format_usage_sorted_by_count() {
        let usage = vec![
            TemplateUsage {
                template_id: Uuid::new_v4(),
                template_name: "Rare".to_string(),
                template_type: TemplateType::Sms,
                count: 1,
                is_precompiled_letter: false,
            },
            TemplateUsage {
                template_id: Uuid::new_v4(),
                template_name: "Common".to_string(),
                template_type: TemplateType::Email,
                count: 40,
                is_precompiled_letter: false,
            },
        ];

        let output = format_usage(&usage);
        let common = output.find("Common").unwrap();
        let rare = output.find("Rare").unwrap();
        assert!(common < rare);
    }
}
