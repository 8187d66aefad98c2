//! Plain-text rendering of the view state.

use std::fmt::Write;

use study_core::ViewState;

/// Draw the error banner, the draft form and the subject list.
pub fn render(state: &ViewState) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_screen(&mut out, state);
    out
}

fn write_screen(out: &mut String, state: &ViewState) -> std::fmt::Result {
    writeln!(out, "== Smart Study Planner ==")?;
    if let Some(error) = &state.last_error {
        writeln!(out, "!! {error}")?;
    }

    let draft = &state.draft;
    writeln!(out)?;
    writeln!(out, "-- Add New Subject --")?;
    writeln!(out, "Subject Name: {}", draft.name)?;
    writeln!(out, "Chapters:")?;
    if draft.chapters.is_empty() {
        writeln!(out, "  (none)")?;
    }
    for (i, chapter) in draft.chapters.iter().enumerate() {
        writeln!(out, "  {}. {chapter}", i + 1)?;
    }
    writeln!(out, "Exam Date: {}", draft.exam_date)?;
    writeln!(out, "Difficulty (1-5): {}", draft.difficulty)?;

    writeln!(out)?;
    writeln!(out, "-- Your Subjects --")?;
    if state.is_busy {
        writeln!(out, "Loading...")?;
    }
    if state.subjects.is_empty() && !state.is_busy {
        writeln!(out, "No subjects added yet")?;
    }
    for (i, subject) in state.subjects.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, subject.name())?;
        writeln!(out, "   Exam Date: {}", subject.exam_date())?;
        writeln!(out, "   Difficulty: {} / 5", subject.difficulty())?;
        writeln!(out, "   Chapters:")?;
        for chapter in subject.chapters() {
            writeln!(out, "   - {chapter}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use study_core::{Subject, SubjectDraft};

    use super::*;

    fn subject(id: &str, name: &str) -> Subject {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "name": name,
            "chapters": ["Ch1", "Ch2"],
            "exam_date": "2024-06-01",
            "difficulty": 4
        }))
        .unwrap()
    }

    #[test]
    fn empty_state() {
        let screen = render(&ViewState::default());
        assert!(screen.contains("No subjects added yet"));
        assert!(screen.contains("Difficulty (1-5): 3"));
        assert!(screen.contains("(none)"));
        assert!(!screen.contains("!!"));
    }

    #[test]
    fn busy_state_shows_loading_instead_of_empty_notice() {
        let state = ViewState {
            is_busy: true,
            ..ViewState::default()
        };
        let screen = render(&state);
        assert!(screen.contains("Loading..."));
        assert!(!screen.contains("No subjects added yet"));
    }

    #[test]
    fn lists_subjects_and_error() {
        let state = ViewState {
            subjects: vec![subject("1", "Math"), subject("2", "Bio")],
            draft: SubjectDraft {
                name: "Chem".into(),
                chapters: vec!["Atoms".into()],
                ..SubjectDraft::default()
            },
            is_busy: false,
            last_error: Some("Failed to delete subject".into()),
        };
        let screen = render(&state);
        assert!(screen.contains("!! Failed to delete subject"));
        assert!(screen.contains("Subject Name: Chem"));
        assert!(screen.contains("  1. Atoms"));
        assert!(screen.contains("2. Bio"));
        assert!(screen.contains("Difficulty: 4 / 5"));
        assert!(screen.contains("   - Ch2"));
    }
}
