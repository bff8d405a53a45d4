//! Trend-analysis prompt construction.
//!
//! The trend tool concatenates up-context + target + down-context rows
//! (feature columns only, prior predicted label excluded) and asks the
//! model for a structured per-feature trend narrative that later feeds
//! the decision prompts.

use crate::types::LogWindow;

/// Build the trend-analysis prompt for one window.
pub fn build_trend_prompt(window: &LogWindow) -> String {
    let mut prompt = String::from(
        "# Well Log Data Trend Analysis Task\n\
         ## Task Description\n\
         You are a petroleum well log data analysis expert. Please conduct detailed trend \
         analysis on the given well log data window, focusing on the trend variations of \
         each feature in the target sample segment.\n",
    );

    prompt.push_str(
        "\n## Analysis Requirements\n\
         Please conduct in-depth trend analysis of the above data with the following specific requirements:\n\n\
         ### 1. Overall Window Trend Overview\n\
         - Describe the basic geological characteristics of the entire data window\n\
         - Analyze the continuity and changes between context, target segment, and post sections\n\n\
         ### 2. Detailed Feature Trend Analysis\n\
         For each feature, conduct detailed analysis focusing on:\n\
         - **Value Change Trends**: Increasing, decreasing, stable, fluctuating, etc.\n\
         - **Curve Morphology**: Left convex, right convex, sawtooth, smooth, etc.\n\
         - **Relative Value Levels**: High or low relative to the entire window baseline\n\
         - **Mutation Point Identification**: Obvious value jumps or trend reversals\n\
         - **Periodic Fluctuations**: Whether there are regular ups and downs\n\n\
         ### 3. Inter-feature Correlation Analysis\n\
         - Analyze synergistic changes between different features\n\
         - Identify possible geological significance combinations\n\
         - Resistivity features relationship with other features\n\n\
         ### 4. Geological Interpretation Suggestions\n\
         - Based on trend analysis results, provide possible geological layer type tendencies\n\
         - Focus on feature combinations related to reservoir quality\n\
         - Identify possible hydrocarbon indication features\n",
    );

    prompt.push_str(&format!(
        "Here is the well log data window for analysis:\n{}\n",
        window.context_table()
    ));

    prompt.push_str(
        "\n## Output Format Requirements\n\
         Please organize your analysis results according to the following structure:\n\n\
         **Overall Trend Overview:**\n\
         [Basic characteristics and continuity analysis of the entire window]\n\n\
         **Detailed Feature Analysis:**\n\
         - GR Trend: [Specific description]\n\
         - ILD_log10 Trend: [Specific description]\n\
         - DeltaPHI Trend: [Specific description]\n\
         - PHIND Trend: [Specific description]\n\
         - PE Trend: [Specific description]\n\
         - NM_M Trend: [Specific description]\n\
         - RELPOS Trend: [Specific description]\n\n\
         Please ensure the analysis is detailed and specific, using professional geological \
         terminology to provide valuable trend information for subsequent reservoir classification.\n",
    );

    prompt
}
