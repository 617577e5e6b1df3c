//! Response bodies shaped like the ones the portal backend sends.

pub const PAGINATION: &str =
    r#"{"total_items": 2, "total_pages": 1, "current_page": 1, "items_per_page": 100, "next_page": null, "prev_page": null}"#;

#[must_use]
pub fn study_activities_body() -> String {
    format!(
        r#"{{
            "study_activities": [
                {{"id": 1, "name": "Flashcards", "thumbnail_url": "https://example.com/flashcards.png", "description": "Review vocabulary", "launch_url": "https://example.com/flashcards"}},
                {{"id": 2, "name": "Writing Practice", "thumbnail_url": null, "description": null, "launch_url": null}}
            ],
            "pagination": {PAGINATION}
        }}"#
    )
}

#[must_use]
pub fn words_body() -> String {
    format!(
        r#"{{
            "words": [
                {{"id": 1, "french_word": "chat", "quebec_pronunciation": "sha", "english": "cat", "correct_count": 5, "wrong_count": 2}},
                {{"id": 2, "french_word": "char", "quebec_pronunciation": "shar", "english": "car", "correct_count": 0, "wrong_count": 1}}
            ],
            "pagination": {PAGINATION}
        }}"#
    )
}

#[must_use]
pub fn groups_body() -> String {
    format!(
        r#"{{
            "groups": [
                {{"id": 1, "name": "Animals", "word_count": 12}},
                {{"id": 2, "name": "Transport", "word_count": 8}}
            ],
            "pagination": {PAGINATION}
        }}"#
    )
}

#[must_use]
pub fn study_sessions_body() -> String {
    format!(
        r#"{{
            "study_sessions": [
                {{"id": 2, "activity_name": "Flashcards", "group_name": "Animals", "start_time": "2025-03-02T09:30:00Z", "end_time": null, "number_of_review_items": 4}},
                {{"id": 1, "activity_name": "Flashcards", "group_name": "Transport", "start_time": "2025-03-01T10:00:00Z", "end_time": "2025-03-01T10:15:00Z", "number_of_review_items": 20}}
            ],
            "pagination": {PAGINATION}
        }}"#
    )
}
