//! Area grouping for the venue directory.

use std::collections::HashMap;

use serde::Serialize;

/// Anything that sits in a `(city, state)` area.
pub trait Located {
    fn city(&self) -> &str;
    fn state(&self) -> &str;
}

/// One `(city, state)` group of venues.
#[derive(Debug, Clone, Serialize)]
pub struct Area<T> {
    pub city: String,
    pub state: String,
    pub venues: Vec<T>,
}

/// Group items by their exact `(city, state)` pair.
///
/// Areas appear in the order their first member appears in the input and
/// members keep their relative order, so a pre-sorted input yields a sorted
/// directory. Two cities with the same name in different states are
/// separate areas.
pub fn group_by_area<T, I>(items: I) -> Vec<Area<T>>
where
    T: Located,
    I: IntoIterator<Item = T>,
{
    let mut areas: Vec<Area<T>> = Vec::new();
    let mut index: HashMap<(String, String), usize> = HashMap::new();

    for item in items {
        let key = (item.city().to_string(), item.state().to_string());
        match index.get(&key) {
            Some(&pos) => areas[pos].venues.push(item),
            None => {
                index.insert(key.clone(), areas.len());
                areas.push(Area {
                    city: key.0,
                    state: key.1,
                    venues: vec![item],
                });
            }
        }
    }

    areas
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Spot {
        name: &'static str,
        city: &'static str,
        state: &'static str,
    }

    impl Located for Spot {
        fn city(&self) -> &str {
            self.city
        }
        fn state(&self) -> &str {
            self.state
        }
    }

    fn spot(name: &'static str, city: &'static str, state: &'static str) -> Spot {
        Spot { name, city, state }
    }

    #[test]
    fn every_item_lands_in_its_own_area_exactly_once() {
        let spots = vec![
            spot("The Musical Hop", "San Francisco", "CA"),
            spot("The Dueling Pianos Bar", "New York", "NY"),
            spot("Park Square Live Music & Coffee", "San Francisco", "CA"),
        ];

        let areas = group_by_area(spots);

        assert_eq!(areas.len(), 2);
        let total: usize = areas.iter().map(|a| a.venues.len()).sum();
        assert_eq!(total, 3);
        for area in &areas {
            for venue in &area.venues {
                assert_eq!(venue.city, area.city);
                assert_eq!(venue.state, area.state);
            }
        }
    }

    #[test]
    fn same_city_name_in_different_states_is_split() {
        let areas = group_by_area(vec![
            spot("A", "Portland", "OR"),
            spot("B", "Portland", "ME"),
        ]);
        assert_eq!(areas.len(), 2);
        assert_eq!(areas[0].state, "OR");
        assert_eq!(areas[1].state, "ME");
    }

    #[test]
    fn preserves_first_appearance_order() {
        let areas = group_by_area(vec![
            spot("A", "Austin", "TX"),
            spot("B", "Boston", "MA"),
            spot("C", "Austin", "TX"),
        ]);
        assert_eq!(areas[0].city, "Austin");
        assert_eq!(
            areas[0].venues.iter().map(|s| s.name).collect::<Vec<_>>(),
            vec!["A", "C"]
        );
        assert_eq!(areas[1].city, "Boston");
    }

    #[test]
    fn empty_input_yields_no_areas() {
        assert!(group_by_area(Vec::<Spot>::new()).is_empty());
    }
}
