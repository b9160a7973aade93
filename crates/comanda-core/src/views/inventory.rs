use crate::models::{Inventory, StockLevel};
use crate::state::{Panel, PanelLine, Tone};

pub const INVENTORY_TITLE: &str = "📦 Current Inventory";

pub fn stock_tone(level: StockLevel) -> Tone {
    match level {
        StockLevel::High => Tone::Success,
        StockLevel::Low => Tone::Warning,
        StockLevel::Out => Tone::Danger,
    }
}

pub fn inventory(inventory: &Inventory) -> Panel {
    let mut panel = Panel::new(INVENTORY_TITLE);
    if inventory.is_empty() {
        panel.push(PanelLine::muted("No items in stock"));
        return panel;
    }

    let width = inventory
        .iter()
        .map(|(name, _)| name.chars().count())
        .max()
        .unwrap_or(0);
    for (name, quantity) in inventory.iter() {
        panel.push(PanelLine::new(
            stock_tone(StockLevel::for_quantity(quantity)),
            format!("{:<width$}  {} units", name, quantity, width = width),
        ));
    }
    panel
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_carry_stock_tone() {
        let inv: Inventory = serde_json::from_str(r#"{"Arroz":0,"Feijao":5,"Frango":12}"#).unwrap();
        let panel = inventory(&inv);
        let tones: Vec<Tone> = panel.lines.iter().map(|l| l.tone).collect();
        assert_eq!(tones, vec![Tone::Danger, Tone::Warning, Tone::Success]);
        assert_eq!(panel.lines[0].text, "Arroz   0 units");
    }

    #[test]
    fn test_empty_inventory_message() {
        let panel = inventory(&Inventory::default());
        assert_eq!(panel.plain_text(), "📦 Current Inventory\nNo items in stock");
    }
}
