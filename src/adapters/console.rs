use crate::domain::model::Offer;

pub const NO_RESULTS: &str = "No results found.";

/// 每筆報價一行：`<CAR_TYPE> - <supplier> - <price>`
pub fn render_offers(offers: &[Offer]) -> String {
    if offers.is_empty() {
        return NO_RESULTS.to_string();
    }

    offers
        .iter()
        .map(|offer| format!("{} - {} - {}", offer.car_type, offer.supplier, offer.price))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Single-supplier listing: `<CAR_TYPE> - <price>`, no supplier column.
pub fn render_supplier_options(offers: &[Offer]) -> String {
    if offers.is_empty() {
        return "No results found".to_string();
    }

    offers
        .iter()
        .map(|offer| format!("{} - {}", offer.car_type, offer.price))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::CarType;

    #[test]
    fn test_render_offers() {
        let offers = vec![
            Offer::new(CarType::Minibus, "Jeff's Taxis", 1250),
            Offer::new(CarType::Standard, "Dave's Taxis", 300),
        ];

        assert_eq!(
            render_offers(&offers),
            "MINIBUS - Jeff's Taxis - 1250\nSTANDARD - Dave's Taxis - 300"
        );
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_offers(&[]), "No results found.");
        assert_eq!(render_supplier_options(&[]), "No results found");
    }

    #[test]
    fn test_render_supplier_options() {
        let offers = vec![Offer::new(CarType::Executive, "Dave's Taxis", 640)];
        assert_eq!(render_supplier_options(&offers), "EXECUTIVE - 640");
    }
}
