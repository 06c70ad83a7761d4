use labelroute_core::Weight;

/// Whole weights print without decimals, others with up to three.
pub fn format_weight(weight: Weight) -> String {
    if weight.is_infinite() {
        return "∞".to_string();
    }
    if weight.fract() == 0.0 {
        return format!("{weight:.0}");
    }

    let formatted = format!("{weight:.3}");
    formatted.trim_end_matches('0').trim_end_matches('.').to_string()
}

pub fn format_number(number: usize) -> String {
    let digits = number.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);

    for (position, digit) in digits.chars().enumerate() {
        if position > 0 && (digits.len() - position) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(digit);
    }
    formatted
}
