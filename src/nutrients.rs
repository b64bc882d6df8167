use serde::Serialize;

use crate::error::InputError;

/// Which nutrient a bound applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nutrient {
    Calories,
    Protein,
    Carbs,
    Fat,
}

impl Nutrient {
    pub fn label(&self) -> &'static str {
        match self {
            Nutrient::Calories => "calories",
            Nutrient::Protein => "protein",
            Nutrient::Carbs => "carbs",
            Nutrient::Fat => "fat",
        }
    }

    /// Inclusive domain accepted by the search form
    pub fn limits(&self) -> (u32, u32) {
        match self {
            Nutrient::Calories => (0, 5000),
            Nutrient::Protein => (0, 200),
            Nutrient::Carbs => (0, 500),
            Nutrient::Fat => (0, 500),
        }
    }
}

/// A `min..max` pair with `min < max`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bounds {
    pub min: u32,
    pub max: u32,
}

impl Bounds {
    fn checked(nutrient: Nutrient, min: u32, max: u32) -> Result<Self, InputError> {
        let (floor, ceiling) = nutrient.limits();
        if min < floor || max > ceiling {
            return Err(InputError::OutOfBounds {
                nutrient: nutrient.label(),
                floor,
                ceiling,
            });
        }
        if min >= max {
            return Err(InputError::InvalidRange {
                nutrient: nutrient.label(),
            });
        }
        Ok(Bounds { min, max })
    }
}

/// Validated nutrient filter. The only way to build one is `new`, so every
/// range that reaches the query builder already satisfies `min < max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NutrientRange {
    calories: Bounds,
    protein: Bounds,
    carbs: Bounds,
    fat: Bounds,
}

impl NutrientRange {
    /// Each argument is a `(min, max)` pair
    pub fn new(
        calories: (u32, u32),
        protein: (u32, u32),
        carbs: (u32, u32),
        fat: (u32, u32),
    ) -> Result<Self, InputError> {
        Ok(NutrientRange {
            calories: Bounds::checked(Nutrient::Calories, calories.0, calories.1)?,
            protein: Bounds::checked(Nutrient::Protein, protein.0, protein.1)?,
            carbs: Bounds::checked(Nutrient::Carbs, carbs.0, carbs.1)?,
            fat: Bounds::checked(Nutrient::Fat, fat.0, fat.1)?,
        })
    }

    pub fn calories(&self) -> Bounds {
        self.calories
    }

    pub fn protein(&self) -> Bounds {
        self.protein
    }

    pub fn carbs(&self) -> Bounds {
        self.carbs
    }

    pub fn fat(&self) -> Bounds {
        self.fat
    }
}

impl Default for NutrientRange {
    fn default() -> Self {
        NutrientRange {
            calories: Bounds { min: 500, max: 4500 },
            protein: Bounds { min: 50, max: 150 },
            carbs: Bounds { min: 50, max: 450 },
            fat: Bounds { min: 50, max: 450 },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_range() {
        let range = NutrientRange::new((0, 5000), (10, 20), (0, 1), (499, 500)).unwrap();
        assert_eq!(range.calories(), Bounds { min: 0, max: 5000 });
        assert_eq!(range.fat(), Bounds { min: 499, max: 500 });
    }

    #[test]
    fn test_min_equal_max_rejected() {
        let err = NutrientRange::new((500, 4500), (80, 80), (50, 450), (50, 450)).unwrap_err();
        assert_eq!(err, InputError::InvalidRange { nutrient: "protein" });
        assert!(err.to_string().contains("less than maximum protein"));
    }

    #[test]
    fn test_min_above_max_rejected() {
        let err = NutrientRange::new((4000, 1000), (50, 150), (50, 450), (50, 450)).unwrap_err();
        assert_eq!(err, InputError::InvalidRange { nutrient: "calories" });
    }

    #[test]
    fn test_out_of_domain_rejected() {
        let err = NutrientRange::new((500, 4500), (50, 250), (50, 450), (50, 450)).unwrap_err();
        assert_eq!(
            err,
            InputError::OutOfBounds {
                nutrient: "protein",
                floor: 0,
                ceiling: 200
            }
        );
        assert!(NutrientRange::new((0, 6000), (0, 1), (0, 1), (0, 1)).is_err());
    }

    #[test]
    fn test_default_matches_form() {
        let range = NutrientRange::default();
        assert_eq!(range.calories(), Bounds { min: 500, max: 4500 });
        assert_eq!(range.protein(), Bounds { min: 50, max: 150 });
        assert_eq!(range.carbs(), Bounds { min: 50, max: 450 });
        assert_eq!(range.fat(), Bounds { min: 50, max: 450 });
    }
}
