use crate::domain::capacity;
use crate::domain::model::Offer;

/// What merging a single offer did to the result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeEffect {
    Inserted,
    Replaced,
    Kept,
    Discarded,
}

/// 單次聚合內每個車型目前最便宜的報價
///
/// Owned by one aggregation call and mutated only after every supplier call
/// has finished. Insertion order of categories is preserved, which is what
/// makes the final descending sort stable for equal prices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    offers: Vec<Offer>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a result set with already-reduced offers, one per category.
    pub fn from_offers(offers: Vec<Offer>) -> Self {
        let mut set = Self::new();
        for offer in offers {
            set.insert_or_replace(offer);
        }
        set
    }

    pub fn len(&self) -> usize {
        self.offers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offers.is_empty()
    }

    pub fn offers(&self) -> &[Offer] {
        &self.offers
    }

    /// 合併單筆報價：容量不足丟棄，新車型插入，嚴格更便宜才取代
    pub fn merge(&mut self, offer: Offer, passengers: u8) -> MergeEffect {
        if !capacity::fits(offer.car_type, passengers) {
            return MergeEffect::Discarded;
        }
        self.insert_or_replace(offer)
    }

    /// Merges every offer of one supplier, in the order the supplier sent them.
    pub fn merge_all(&mut self, offers: Vec<Offer>, passengers: u8) -> Vec<MergeEffect> {
        offers
            .into_iter()
            .map(|offer| self.merge(offer, passengers))
            .collect()
    }

    /// 依價格由高到低排序；同價保留插入順序
    pub fn into_sorted(self) -> Vec<Offer> {
        let mut offers = self.offers;
        offers.sort_by(|a, b| b.price.cmp(&a.price));
        offers
    }

    fn insert_or_replace(&mut self, offer: Offer) -> MergeEffect {
        match self
            .offers
            .iter_mut()
            .find(|existing| existing.car_type == offer.car_type)
        {
            None => {
                self.offers.push(offer);
                MergeEffect::Inserted
            }
            Some(existing) if offer.price < existing.price => {
                existing.price = offer.price;
                existing.supplier = offer.supplier;
                MergeEffect::Replaced
            }
            Some(_) => MergeEffect::Kept,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::CarType;

    fn existing() -> ResultSet {
        ResultSet::from_offers(vec![
            Offer::new(CarType::PeopleCarrier, "Eric's Taxis", 200),
            Offer::new(CarType::LuxuryPeopleCarrier, "Dave's Taxis", 300),
        ])
    }

    #[test]
    fn test_new_supplier_cheaper_replaces_offer() {
        let mut set = existing();

        let effect = set.merge(Offer::new(CarType::PeopleCarrier, "Jeff's Taxis", 100), 2);

        assert_eq!(effect, MergeEffect::Replaced);
        assert_eq!(
            set.offers(),
            &[
                Offer::new(CarType::PeopleCarrier, "Jeff's Taxis", 100),
                Offer::new(CarType::LuxuryPeopleCarrier, "Dave's Taxis", 300),
            ]
        );
    }

    #[test]
    fn test_new_supplier_more_expensive_keeps_offer() {
        let mut set = existing();

        let effect = set.merge(Offer::new(CarType::PeopleCarrier, "Jeff's Taxis", 5000), 2);

        assert_eq!(effect, MergeEffect::Kept);
        assert_eq!(set, existing());
    }

    #[test]
    fn test_equal_price_keeps_earlier_supplier() {
        let mut set = existing();

        let effect = set.merge(Offer::new(CarType::PeopleCarrier, "Jeff's Taxis", 200), 2);

        assert_eq!(effect, MergeEffect::Kept);
        assert_eq!(set.offers()[0].supplier, "Eric's Taxis");
    }

    #[test]
    fn test_new_car_type_is_appended() {
        let mut set = existing();

        let effect = set.merge(Offer::new(CarType::Minibus, "Jeff's Taxis", 1250), 2);

        assert_eq!(effect, MergeEffect::Inserted);
        assert_eq!(
            set.offers(),
            &[
                Offer::new(CarType::PeopleCarrier, "Eric's Taxis", 200),
                Offer::new(CarType::LuxuryPeopleCarrier, "Dave's Taxis", 300),
                Offer::new(CarType::Minibus, "Jeff's Taxis", 1250),
            ]
        );
    }

    #[test]
    fn test_empty_result_set_takes_first_offer() {
        let mut set = ResultSet::new();

        set.merge(Offer::new(CarType::Minibus, "Jeff's Taxis", 1250), 2);

        assert_eq!(
            set.into_sorted(),
            vec![Offer::new(CarType::Minibus, "Jeff's Taxis", 1250)]
        );
    }

    #[test]
    fn test_not_enough_seats_discards_offer() {
        let mut set = ResultSet::from_offers(vec![Offer::new(
            CarType::PeopleCarrier,
            "Eric's Taxis",
            200,
        )]);

        let effect = set.merge(Offer::new(CarType::Luxury, "Jeff's Taxis", 1000), 10);

        assert_eq!(effect, MergeEffect::Discarded);
        assert_eq!(
            set.offers(),
            &[Offer::new(CarType::PeopleCarrier, "Eric's Taxis", 200)]
        );
    }

    #[test]
    fn test_sorted_descending_and_stable_for_ties() {
        let mut set = ResultSet::new();
        set.merge_all(
            vec![
                Offer::new(CarType::Standard, "Dave's Taxis", 300),
                Offer::new(CarType::Executive, "Dave's Taxis", 500),
                Offer::new(CarType::Luxury, "Eric's Taxis", 300),
                Offer::new(CarType::Minibus, "Jeff's Taxis", 900),
            ],
            1,
        );

        let sorted = set.into_sorted();

        let order: Vec<CarType> = sorted.iter().map(|o| o.car_type).collect();
        assert_eq!(
            order,
            vec![
                CarType::Minibus,
                CarType::Executive,
                CarType::Standard,
                CarType::Luxury,
            ]
        );
        assert!(sorted.windows(2).all(|pair| pair[0].price >= pair[1].price));
    }

    #[test]
    fn test_at_most_one_offer_per_car_type() {
        let mut set = ResultSet::new();
        let effects = set.merge_all(
            vec![
                Offer::new(CarType::Standard, "Dave's Taxis", 300),
                Offer::new(CarType::Standard, "Dave's Taxis", 250),
                Offer::new(CarType::Standard, "Dave's Taxis", 400),
            ],
            3,
        );

        assert_eq!(
            effects,
            vec![MergeEffect::Inserted, MergeEffect::Replaced, MergeEffect::Kept]
        );
        assert_eq!(set.len(), 1);
        assert_eq!(set.offers()[0].price, 250);
    }
}
