use idealweight_model::profile::{ProfileInput, AGE_YEARS, CURRENT_WEIGHT_KG, HEIGHT_CM};
use itertools::Itertools;
use strum::IntoEnumIterator;

fn escape(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '&' => "&amp;".to_owned(),
            '<' => "&lt;".to_owned(),
            '>' => "&gt;".to_owned(),
            '"' => "&quot;".to_owned(),
            '\'' => "&#39;".to_owned(),
            c => c.to_string(),
        })
        .collect()
}

fn options<T>(selected: T) -> String
where
    T: IntoEnumIterator + PartialEq + Copy + Into<&'static str>,
{
    T::iter()
        .map(|value| {
            let label: &'static str = value.into();
            format!(
                "<option value='{}'{}>{}</option>",
                label,
                if value == selected { " selected" } else { "" },
                label
            )
        })
        .join("")
}

pub enum Outcome<'a> {
    Empty,
    Result(&'a str),
    Failure(&'a str),
}

/// The whole page: the form, prefilled with `input`, followed by the result
/// card or the error, if any.
pub fn render(input: &ProfileInput, outcome: Outcome) -> String {
    let below_form = match outcome {
        Outcome::Empty => String::new(),
        Outcome::Result(card) => card.to_owned(),
        Outcome::Failure(message) => format!(
            "<p style='color:#E74C3C; font-weight:bold;'>{}</p>",
            escape(message)
        ),
    };

    format!(
        "<!DOCTYPE html>
<html>
<head>
    <meta charset='utf-8'>
    <title>Ideal weight calculator</title>
</head>
<body style='max-width:720px; margin:auto; font-family:sans-serif;'>
    <h1>⚖️ Ideal weight calculator</h1>
    <p>Estimates a <b>personalized target weight</b> from your characteristics.</p>
    <form method='post' action='/'>
        <label>Age <input type='number' name='age' min='{age_min}' max='{age_max}' value='{age}'></label>
        <label>Height (cm) <input type='number' name='height_cm' min='{height_min}' max='{height_max}' value='{height}'></label>
        <label>Sex <select name='sex'>{sex_options}</select></label>
        <label>Activity level <select name='activity'>{activity_options}</select></label>
        <label>Current weight (kg) <input type='number' name='current_weight_kg' step='0.1' min='{weight_min:.1}' max='{weight_max:.1}' value='{weight:.1}'></label>
        <button type='submit'>Compute my ideal weight</button>
    </form>
    {below_form}
</body>
</html>",
        age_min = AGE_YEARS.start(),
        age_max = AGE_YEARS.end(),
        age = input.age,
        height_min = HEIGHT_CM.start(),
        height_max = HEIGHT_CM.end(),
        height = input.height_cm,
        sex_options = options(input.sex),
        activity_options = options(input.activity),
        weight_min = CURRENT_WEIGHT_KG.start(),
        weight_max = CURRENT_WEIGHT_KG.end(),
        weight = input.current_weight_kg,
    )
}
