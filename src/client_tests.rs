// Tests for mood payload parsing, clamping and the neutral defaults

use crate::client::{parse_affect_payload, parse_analysis_payload};
use crate::models::GenreSelection;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parses_a_full_payload() {
        let target = parse_affect_payload(
            r#"{"valence": 0.8, "energy": 0.3, "diagnosis": "wistful sunset drive"}"#,
        )
        .unwrap();

        assert_relative_eq!(target.valence, 0.8);
        assert_relative_eq!(target.energy, 0.3);
        assert_eq!(target.diagnosis, "wistful sunset drive");
    }

    #[test]
    fn test_missing_keys_fall_back_per_key() {
        let target = parse_affect_payload(r#"{"energy": 0.9}"#).unwrap();

        assert_relative_eq!(target.valence, 0.5);
        assert_relative_eq!(target.energy, 0.9);
        assert_eq!(target.diagnosis, "unknown");
    }

    #[test]
    fn test_out_of_range_values_are_clamped() {
        let target = parse_affect_payload(r#"{"valence": 1.7, "energy": -0.2}"#).unwrap();

        assert_relative_eq!(target.valence, 1.0);
        assert_relative_eq!(target.energy, 0.0);
    }

    #[test]
    fn test_non_finite_values_fall_back_to_neutral() {
        // 1e200 overflows f32 to infinity
        let target = parse_affect_payload(r#"{"valence": 1e200, "energy": 0.4}"#).unwrap();

        assert_relative_eq!(target.valence, 0.5);
        assert_relative_eq!(target.energy, 0.4);
    }

    #[test]
    fn test_blank_diagnosis_falls_back() {
        let target = parse_affect_payload(r#"{"diagnosis": "   "}"#).unwrap();

        assert_eq!(target.diagnosis, "unknown");
    }

    #[test]
    fn test_strips_markdown_fences() {
        let content =
            "```json\n{\"valence\": 0.2, \"energy\": 0.1, \"diagnosis\": \"heavy rain\"}\n```";

        let target = parse_affect_payload(content).unwrap();

        assert_relative_eq!(target.valence, 0.2);
        assert_eq!(target.diagnosis, "heavy rain");
    }

    #[test]
    fn test_rejects_non_json_content() {
        assert!(parse_affect_payload("sorry, I cannot help with that").is_err());
    }

    #[test]
    fn test_all_token_selects_every_genre() {
        let analysis = parse_analysis_payload(r#"{"selected_genres": "ALL"}"#).unwrap();

        assert_eq!(analysis.genres, GenreSelection::MatchAll);
    }

    #[test]
    fn test_stray_token_degrades_to_match_all() {
        let analysis = parse_analysis_payload(r#"{"selected_genres": "Rock"}"#).unwrap();

        assert_eq!(analysis.genres, GenreSelection::MatchAll);
    }

    #[test]
    fn test_genre_list_is_kept() {
        let analysis = parse_analysis_payload(r#"{"selected_genres": ["Rock", "Jazz"]}"#).unwrap();

        assert_eq!(
            analysis.genres,
            GenreSelection::Genres(vec!["Rock".to_string(), "Jazz".to_string()])
        );
    }

    #[test]
    fn test_empty_or_blank_genre_lists_collapse_to_match_all() {
        let empty = parse_analysis_payload(r#"{"selected_genres": []}"#).unwrap();
        assert_eq!(empty.genres, GenreSelection::MatchAll);

        let blank = parse_analysis_payload(r#"{"selected_genres": ["", "  "]}"#).unwrap();
        assert_eq!(blank.genres, GenreSelection::MatchAll);
    }

    #[test]
    fn test_missing_selection_means_match_all() {
        let analysis =
            parse_analysis_payload(r#"{"valence": 0.6, "energy": 0.7, "diagnosis": "upbeat"}"#)
                .unwrap();

        assert_eq!(analysis.genres, GenreSelection::MatchAll);
        assert_relative_eq!(analysis.target.valence, 0.6);
        assert_eq!(analysis.target.diagnosis, "upbeat");
    }
}
