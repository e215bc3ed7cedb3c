//! Fixed export-readiness checklist template
//!
//! Order encodes priority: "next steps" are drawn from the front of the list.

/// One template entry: activity label and its offset from the session date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateItem {
    pub label: &'static str,
    pub day_offset: i64,
}

const fn item(label: &'static str, ordinal: i64) -> TemplateItem {
    TemplateItem {
        label,
        day_offset: ordinal * 2,
    }
}

/// Number of checklist items
pub const CHECKLIST_LEN: usize = 15;

/// The export-readiness activities, staggered two days apart
pub static TEMPLATE: [TemplateItem; CHECKLIST_LEN] = [
    item("Select flagship product", 0),
    item("Choose 1-2 target countries", 1),
    item("Secure product photos", 2),
    item("Complete product brochure (PDF)", 3),
    item("Write promotional copy (English)", 4),
    item("Sign up for and set up digital platform", 5),
    item("Register products", 6),
    item("Send emails/messages to buyers", 7),
    item("Post on social media", 8),
    item("Apply for KOTRA consultation session", 9),
    item("Request buyer meetings", 10),
    item("Propose samples or receive feedback", 11),
    item("Complete follow-up meeting or quotation", 12),
    item("Close first deal or sign contract", 13),
    item("Review results and plan next steps", 14),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_template_offsets_staggered() {
        for (i, entry) in TEMPLATE.iter().enumerate() {
            assert_eq!(entry.day_offset, 2 * i as i64);
        }
    }

    #[test]
    fn test_template_labels_unique() {
        let labels: HashSet<&str> = TEMPLATE.iter().map(|t| t.label).collect();
        assert_eq!(labels.len(), CHECKLIST_LEN);
    }
}
