use crate::domain::persona::entities::Persona;

/// The built-in health profiles, in display order.
pub fn builtin_personas() -> Vec<Persona> {
    vec![
        Persona::new(
            "clean_label",
            "Clean Label Purist",
            "🥗",
            &["Avoid artificial additives", "Minimize processed ingredients"],
            &[
                "artificial colors",
                "artificial flavors",
                "preservatives",
                "high-fructose corn syrup",
            ],
            &[],
        ),
        Persona::new(
            "celiac",
            "Celiac & Gluten-Free",
            "🍞",
            &["Strict gluten avoidance", "Gut health"],
            &["wheat", "barley", "rye", "malt", "brewers yeast"],
            &["gluten"],
        ),
        Persona::new(
            "diabetic",
            "Diabetic (Low-Glycemic)",
            "🩺",
            &["Manage blood sugar", "Avoid spikes"],
            &["sugar", "maltodextrin", "dextrose", "high-glycemic carbs"],
            &[],
        ),
        Persona::new(
            "bodybuilder",
            "Bodybuilder (High-Protein)",
            "💪",
            &[
                "Maximize protein",
                "Minimize fillers",
                "Support muscle growth",
            ],
            &["soy protein", "cheap fillers", "excessive sugars"],
            &[],
        ),
        Persona::new(
            "migraine",
            "Migraine-Sensitive",
            "🧠",
            &["Prevent triggers", "Reduce inflammation"],
            &["MSG", "nitrates", "artificial sweeteners", "tyramine"],
            &[],
        ),
        Persona::new(
            "keto",
            "Keto (Low-Carb)",
            "⚖️",
            &["Minimize carbs", "Maintain ketosis"],
            &["sugars", "grains", "starches", "high-carb ingredients"],
            &[],
        ),
    ]
}
