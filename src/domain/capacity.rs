use crate::domain::model::CarType;

/// 各車型最大載客數，啟動後不變，所有供應商處理路徑共用唯讀
pub const CAPACITY_TABLE: [(CarType, u8); 6] = [
    (CarType::Standard, 4),
    (CarType::Executive, 4),
    (CarType::Luxury, 4),
    (CarType::PeopleCarrier, 6),
    (CarType::LuxuryPeopleCarrier, 6),
    (CarType::Minibus, 16),
];

pub fn max_passengers(car_type: CarType) -> u8 {
    CAPACITY_TABLE
        .iter()
        .find(|(candidate, _)| *candidate == car_type)
        .map(|(_, seats)| *seats)
        .unwrap_or(0)
}

pub fn fits(car_type: CarType, passengers: u8) -> bool {
    passengers <= max_passengers(car_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_car_type_has_a_capacity() {
        for car_type in CarType::ALL {
            assert!(max_passengers(car_type) > 0, "{} has no capacity", car_type);
        }
    }

    #[test]
    fn test_capacity_boundaries() {
        assert!(fits(CarType::Luxury, 4));
        assert!(!fits(CarType::Luxury, 5));
        assert!(fits(CarType::PeopleCarrier, 6));
        assert!(!fits(CarType::LuxuryPeopleCarrier, 7));
        assert!(fits(CarType::Minibus, 16));
    }
}
