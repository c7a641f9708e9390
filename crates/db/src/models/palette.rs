//! Palette entity model, DTOs and the shaped response view.

use palette_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A palette row from the `palettes` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Palette {
    pub id: DbId,
    pub name: String,
    pub project_id: DbId,
    pub color_one: String,
    pub color_two: String,
    pub color_three: String,
    pub color_four: String,
    pub color_five: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Palette {
    /// The five colors in column order.
    pub fn colors(&self) -> [&str; 5] {
        [
            self.color_one.as_str(),
            self.color_two.as_str(),
            self.color_three.as_str(),
            self.color_four.as_str(),
            self.color_five.as_str(),
        ]
    }
}

/// DTO for creating a new palette under an existing project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePalette {
    pub name: String,
    pub project_id: DbId,
    pub color_one: String,
    pub color_two: String,
    pub color_three: String,
    pub color_four: String,
    pub color_five: String,
}

/// DTO for replacing all five colors of a palette at once.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePaletteColors {
    pub color_one: String,
    pub color_two: String,
    pub color_three: String,
    pub color_four: String,
    pub color_five: String,
}

/// Response view of a palette: the color columns folded into `colors`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapedPalette {
    pub id: DbId,
    pub name: String,
    pub project_id: DbId,
    /// `[color_one, color_two, color_three, color_four, color_five]`.
    pub colors: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<Palette> for ShapedPalette {
    fn from(row: Palette) -> Self {
        Self {
            id: row.id,
            name: row.name,
            project_id: row.project_id,
            colors: vec![
                row.color_one,
                row.color_two,
                row.color_three,
                row.color_four,
                row.color_five,
            ],
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn row() -> Palette {
        let now = Utc::now();
        Palette {
            id: 3,
            name: "Dusk".into(),
            project_id: 1,
            color_one: "#000001".into(),
            color_two: "#000002".into(),
            color_three: "#000003".into(),
            color_four: "#000004".into(),
            color_five: "#000005".into(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn shaping_keeps_color_order() {
        let shaped = ShapedPalette::from(row());
        assert_eq!(
            shaped.colors,
            ["#000001", "#000002", "#000003", "#000004", "#000005"]
        );
    }

    #[test]
    fn shaping_passes_other_fields_through() {
        let original = row();
        let shaped = ShapedPalette::from(original.clone());
        assert_eq!(shaped.id, original.id);
        assert_eq!(shaped.name, original.name);
        assert_eq!(shaped.project_id, original.project_id);
        assert_eq!(shaped.created_at, original.created_at);
        assert_eq!(shaped.updated_at, original.updated_at);
    }

    #[test]
    fn shaped_json_has_no_color_columns() {
        let json = serde_json::to_value(ShapedPalette::from(row())).unwrap();
        let fields = json.as_object().unwrap();
        assert!(fields.keys().all(|k| !k.starts_with("color_")));
        assert_eq!(fields["colors"].as_array().unwrap().len(), 5);
        assert_eq!(fields["name"], "Dusk");
    }

    #[test]
    fn colors_accessor_matches_shaped_order() {
        let original = row();
        let borrowed: Vec<String> = original.colors().iter().map(|c| c.to_string()).collect();
        assert_eq!(borrowed, ShapedPalette::from(original).colors);
    }
}
