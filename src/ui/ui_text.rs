//! Every user-facing label in one place.

pub struct UiText {
    pub app_title: &'static str,

    // --- Navigation bar ---
    pub btn_previous: &'static str,
    pub btn_next: &'static str,
    pub btn_begin: &'static str,
    pub intro_discover: &'static str,

    // --- Step walkthroughs ---
    pub btn_prev_step: &'static str,
    pub btn_next_step: &'static str,

    // --- Stock lab ---
    pub tab_visualization: &'static str,
    pub tab_explanation: &'static str,
    pub plot_title: &'static str,
    pub plot_y_axis: &'static str,
    pub series_historical: &'static str,
    pub series_predicted: &'static str,
    pub label_parameters: &'static str,
    pub label_volatility: &'static str,
    pub label_trend: &'static str,
    pub label_lookback: &'static str,
    pub label_lookback_unit: &'static str,
    pub btn_regenerate: &'static str,
    pub label_insights: &'static str,
    pub insights_lead: &'static str,
    pub label_trend_30d: &'static str,
    pub label_bullish: &'static str,
    pub label_bearish: &'static str,
    pub label_confidence: &'static str,
    pub label_predicted_change: &'static str,

    // --- Knowledge check ---
    pub label_score: &'static str,
    pub btn_show_explanation: &'static str,
    pub btn_hide_explanation: &'static str,
    pub label_explanation: &'static str,
    pub label_correct_answer: &'static str,
    pub btn_prev_question: &'static str,
    pub btn_next_question: &'static str,
    pub btn_complete_test: &'static str,

    // --- Summary ---
    pub summary_scored: &'static str,
    pub summary_learned: &'static str,
    pub summary_key_concepts: &'static str,
    pub summary_applications: &'static str,
    pub summary_resources: &'static str,
    pub summary_courses: &'static str,
    pub summary_books: &'static str,

    // --- Help overlay ---
    pub help_title: &'static str,
    pub help_lines: &'static [&'static str],
}

pub static UI_TEXT: UiText = UiText {
    app_title: "RNN Primer",

    btn_previous: "⏴ Previous",
    btn_next: "Next ⏵",
    btn_begin: "Begin Learning",
    intro_discover: "In this interactive module, you'll discover:",

    btn_prev_step: "⏴ Previous Step",
    btn_next_step: "Next Step ⏵",

    tab_visualization: "Visualization",
    tab_explanation: "How It Works",
    plot_title: "Stock Price Prediction",
    plot_y_axis: "Price ($)",
    series_historical: "Historical Stock Price",
    series_predicted: "Predicted Stock Price",
    label_parameters: "Model Parameters",
    label_volatility: "Market Volatility",
    label_trend: "Market Trend",
    label_lookback: "Lookback Window",
    label_lookback_unit: "days",
    btn_regenerate: "Regenerate History",
    label_insights: "Prediction Insights",
    insights_lead: "Based on the current parameters, the model predicts:",
    label_trend_30d: "30-Day Trend:",
    label_bullish: "Bullish",
    label_bearish: "Bearish",
    label_confidence: "Confidence Level:",
    label_predicted_change: "Predicted Change:",

    label_score: "Score:",
    btn_show_explanation: "Show Explanation",
    btn_hide_explanation: "Hide Explanation",
    label_explanation: "Explanation:",
    label_correct_answer: "Correct answer:",
    btn_prev_question: "Previous Question",
    btn_next_question: "Next Question",
    btn_complete_test: "Complete Test",

    summary_scored: "You scored",
    summary_learned: "What You've Learned",
    summary_key_concepts: "Key Concepts",
    summary_applications: "Practical Applications",
    summary_resources: "Further Learning Resources",
    summary_courses: "Courses & Tutorials",
    summary_books: "Books & Papers",

    help_title: "Keyboard Shortcuts",
    help_lines: &[
        "←  /  →    previous / next section",
        "↑  /  ↓    previous / next step (diagram sections)",
        "H          toggle this help",
        "Esc        close help",
    ],
};
