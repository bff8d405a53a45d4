//! Static domain-knowledge tables formatted into prompt prose.
//!
//! These texts are the expert knowledge the static tools inject into
//! decision prompts: per-feature log interpretations, per-label facies
//! definitions, and heuristic classification rules.

/// Log-feature interpretations, keyed by column name.
pub const FEATURE_DESCRIPTIONS: [(&str, &str); 7] = [
    (
        "GR",
        "Gamma Ray log. Grain size & shale indicator (higher → finer sediment, shale, \
         mudstone; lower → clean sandstones or carbonates).",
    ),
    (
        "ILD_log10",
        "Resistivity log (log10 scale). Indicates fluid type & lithology. High values often \
         reflect hydrocarbons or tight carbonates; low values indicate water-bearing \
         formations or shales.",
    ),
    (
        "DeltaPHI",
        "Porosity difference (Neutron - Density). Sensitive to gas/light hydrocarbons and \
         carbonate effects. Positive suggests gas/light fluids; negative suggests tight \
         lithologies or cementation.",
    ),
    (
        "PHIND",
        "Porosity indicator. Higher values indicate higher effective porosity and better \
         reservoir quality; lower values indicate tight or low-quality facies.",
    ),
    (
        "PE",
        "Photoelectric factor. Lithology discriminator. Carbonates (limestone/dolomite) \
         generally show higher PE than siliciclastic sediments.",
    ),
    (
        "NM_M",
        "Nonmarine/Marine environmental indicator. Helps distinguish depositional setting \
         and stratigraphic transitions.",
    ),
    (
        "RELPOS",
        "Relative stratigraphic position. Encodes vertical stacking patterns and \
         transgressive-regressive sequences; useful for facies adjacency.",
    ),
];

/// Facies definitions, keyed by canonical label name.
pub const LABEL_DESCRIPTIONS: [(&str, &str); 9] = [
    (
        "Nonmarine sandstone",
        "A clastic sedimentary rock composed of sand-sized grains deposited in terrestrial \
         environments such as rivers or deserts. It typically exhibits high porosity and \
         serves as a primary reservoir rock in continental depositional systems.",
    ),
    (
        "Nonmarine coarse siltstone",
        "A terrestrial sedimentary rock characterized by grain sizes predominantly in the \
         coarse silt range, often deposited in floodplains or lake margins. It represents a \
         depositional setting with moderate to low hydraulic energy compared to sandstone \
         units.",
    ),
    (
        "Nonmarine fine siltstone",
        "A fine-grained siliciclastic rock deposited in low-energy nonmarine settings like \
         deep lacustrine environments. It usually appears as thin beds and reflects quiet \
         water conditions where fine particles can settle out of suspension.",
    ),
    (
        "Marine siltstone and shale",
        "Fine-grained clastic rocks formed in oceanic environments, often exhibiting distinct \
         lamination or fissility. These units are frequently organic-rich and serve as \
         critical source rocks or seals within marine petroleum systems.",
    ),
    (
        "Mudstone",
        "A fine-grained, blocky sedimentary rock composed of clay and silt-sized particles \
         that lacks the fine layering or fissility of shale. Its dense, low-permeability \
         structure makes it an effective regional seal for fluid migration.",
    ),
    (
        "Wackestone",
        "A matrix-supported carbonate rock containing more than 10% grains according to the \
         Dunham classification. This texture indicates a relatively low-energy depositional \
         environment where lime mud was able to accumulate and support the rock's framework.",
    ),
    (
        "Dolomite",
        "A carbonate rock primarily composed of the mineral calcium magnesium carbonate, \
         often formed by the chemical replacement of limestone. It frequently develops \
         significant secondary intercrystalline porosity, making it a highly productive \
         reservoir lithology.",
    ),
    (
        "Packstone-grainstone",
        "A group of grain-supported carbonate rocks characterized by minimal to no lime mud \
         between grains, representing high-energy environments like shoals or reef fronts. \
         These rocks are highly valued in geology for their excellent primary porosity and \
         permeability.",
    ),
    (
        "Phylloid-algal bafflestone",
        "An in-situ carbonate rock formed by leaf-like algae that acted as baffles to trap \
         and bind fine-grained sediment during growth. This lithology is characteristic of \
         bioherms or carbonate mounds and often features complex framework porosity.",
    ),
];

/// Heuristic log-signature rules per facies label.
pub const CLASSIFICATION_SUGGESTIONS: [(&str, &str); 9] = [
    (
        "Nonmarine sandstone",
        "- Coarse-to-medium clastic grains; better sorting and higher porosity\n\
         - Lower GR (clean sand), higher AC/CNL, lower DEN\n\
         - Resistivity moderately elevated due to porosity and grain framework",
    ),
    (
        "Nonmarine coarse siltstone",
        "- Intermediate between sandstone and fine silt/mud units\n\
         - GR slightly increased relative to sandstone due to finer grains & clay\n\
         - Porosity moderate; resistivity mildly reduced vs sandstone",
    ),
    (
        "Nonmarine fine siltstone",
        "- Finer grain size and higher clay content\n\
         - GR further elevated; AC/CNL lower; DEN slightly increased\n\
         - Resistivity modest; transitional to mudstone",
    ),
    (
        "Marine siltstone and shale",
        "- High mud/clay fraction; poor sorting\n\
         - Elevated GR; relatively low porosity; DEN comparatively higher\n\
         - Resistivity low to moderate; more uniform trends due to marine deposition",
    ),
    (
        "Mudstone",
        "- Dominantly clay; minimal grain support\n\
         - Very high GR; low AC/CNL; high DEN; very poor porosity\n\
         - Resistivity generally low unless cementation increases",
    ),
    (
        "Wackestone",
        "- Carbonate matrix supporting allochems; moderate mud content\n\
         - GR low to moderate (cleaner than shale but muddier than grainstones)\n\
         - Resistivity variable; porosity mixed but often modest",
    ),
    (
        "Dolomite",
        "- Dolomitized carbonate; often enhanced secondary porosity\n\
         - Lower GR; DEN reduced relative to limestone; AC/CNL signatures variable\n\
         - Resistivity often elevated due to porosity + fabric changes",
    ),
    (
        "Packstone-grainstone",
        "- Coarse carbonate grains; grain-supported; higher porosity and cleaner\n\
         - Low GR; good AC/CNL indications; lower DEN\n\
         - Resistivity elevated relative to muddier carbonates",
    ),
    (
        "Phylloid-algal bafflestone",
        "- Complex fabric with biogenic baffling and interstitial porosity\n\
         - Low to moderate GR; porosity highly variable (interparticle + moldic)\n\
         - Resistivity variable; local heterogeneity common",
    ),
];

/// Closing framework appended after the per-label suggestions.
pub const ANALYSIS_FRAMEWORK: &str = "\
## General Analysis Framework:
### Step 1: Lithology & Grain-Size Assessment
- **Low GR + good AC/CNL + low DEN** → Cleaner, coarser clastics / grainstones
- **High GR + low AC/CNL + high DEN** → Mud-rich shales/mudstones
- **Carbonates vs siliciclastics** are often distinguished by GR + density + neutron response patterns.

### Step 2: Porosity & Fabric Indicators
- **High porosity**: Enhanced AC/CNL mismatch, density drop, possible resistivity gain.
- **Low porosity**: Compressed AC/CNL, DEN↑, uniform resistivity trends.

### Step 3: Depositional Context & Facies Grouping
- **Nonmarine clastics**: Sandstone → coarse siltstone → fine siltstone → shale sequence.
- **Carbonates**: Wackestone → Packstone-grainstone → Phylloid-algal bafflestone → Dolomite transitions.

**Important**: These relationships reflect general depositional and lithological tendencies.
Facies boundaries are gradational, and curve variability is high.
Interpret trends holistically rather than relying on single-curve thresholds.
";

/// Render the feature-description table as prompt prose.
pub fn feature_descriptions_text() -> String {
    let mut text = String::from("Here are the descriptions of various features:\n");
    for (key, desc) in FEATURE_DESCRIPTIONS {
        text.push_str(&format!("**{key}**: {desc}\n"));
    }
    text
}

/// Render the label-description table as prompt prose.
pub fn label_descriptions_text() -> String {
    let mut text = String::from("Here are the descriptions of various labels:\n");
    for (key, desc) in LABEL_DESCRIPTIONS {
        text.push_str(&format!("**{key}**: {desc}\n"));
    }
    text
}

/// Render the heuristic rules plus the general analysis framework.
pub fn classification_suggestions_text() -> String {
    let mut text = String::from("Here are some suggestions for classification tasks:\n\n");
    for (label, suggestion) in CLASSIFICATION_SUGGESTIONS {
        text.push_str(&format!("### {label}\n{suggestion}\n\n"));
    }
    text.push_str(ANALYSIS_FRAMEWORK);
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FaciesLabel;

    #[test]
    fn test_every_facies_label_has_description_and_suggestion() {
        for label in FaciesLabel::CATEGORIES {
            assert!(
                LABEL_DESCRIPTIONS.iter().any(|(k, _)| *k == label.name()),
                "missing label description for {label}"
            );
            assert!(
                CLASSIFICATION_SUGGESTIONS.iter().any(|(k, _)| *k == label.name()),
                "missing classification suggestion for {label}"
            );
        }
    }

    #[test]
    fn test_rendered_texts_are_nonempty_prose() {
        assert!(feature_descriptions_text().contains("**GR**"));
        assert!(label_descriptions_text().contains("**Dolomite**"));
        assert!(classification_suggestions_text().contains("General Analysis Framework"));
    }
}
