use console::Style;
use zernike_core::config::ZernikeParams;
use zernike_core::consts::DEFAULT_ORDER;
use zernike_core::features::FeatureVector;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    path: Style,
    dim: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            path: Style::new().underlined(),
            dim: Style::new().dim().yellow(),
        }
    }
}

/// Print features as a styled table, one column per image.
pub fn print_feature_table(features: &[FeatureVector], params: &ZernikeParams) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Zernike Moments"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(15)));
    println!();

    let order = params
        .order
        .map(|o| o.to_string())
        .unwrap_or_else(|| format!("{DEFAULT_ORDER} (default)"));
    let radius = match params.radius {
        Some(r) if r > 0.0 => format!("{r} px"),
        _ => "min(width, height)".to_string(),
    };
    println!("  {:<10}{}", s.label.apply_to("Order"), s.value.apply_to(order));
    println!("  {:<10}{}", s.label.apply_to("Radius"), s.value.apply_to(radius));
    println!();

    for (i, fv) in features.iter().enumerate() {
        println!(
            "  {} {}",
            s.dim.apply_to(format!("[{}]", i + 1)),
            s.path.apply_to(&fv.source)
        );
    }
    println!();

    let Some(first) = features.first() else {
        return;
    };

    print!("  {:<10}", s.label.apply_to("Moment"));
    for i in 0..features.len() {
        print!("{:>16}", s.dim.apply_to(format!("[{}]", i + 1)));
    }
    println!();
    println!("  {}", "-".repeat(10 + 16 * features.len()));

    for (row, name) in first.names.iter().enumerate() {
        print!("  {:<10}", name);
        for fv in features {
            match fv.values.get(row) {
                Some(v) => print!("{:>16}", s.value.apply_to(format!("{v:.10}"))),
                None => print!("{:>16}", s.dim.apply_to("-")),
            }
        }
        println!();
    }
    println!();
}
