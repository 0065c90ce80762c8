pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{address_query_builder::*, raw_answer_builder::*};

pub mod address_query_builder {

    use super::*;
    use crate::address::*;

    #[derive(Debug)]
    pub struct AddressQueryBuild {
        query: AddressQuery,
    }

    impl AddressQueryBuild {
        pub fn country_code(mut self, x: &str) -> Self {
            self.query.country_code = x.into();
            self
        }
        pub fn free_form(mut self, x: &str) -> Self {
            self.query.free_form_address = Some(x.into());
            self
        }
        pub fn street(mut self, name: &str) -> Self {
            self.query
                .street_address
                .get_or_insert_with(Default::default)
                .streets
                .push(Street { name: name.into() });
            self
        }
        pub fn building(mut self, number: &str, subdivision: Option<&str>) -> Self {
            self.query
                .street_address
                .get_or_insert_with(Default::default)
                .building = Some(BuildingLocator {
                number: Some(number.into()),
                subdivision: subdivision.map(Into::into),
            });
            self
        }
        pub fn no_street_address(mut self) -> Self {
            self.query.street_address = None;
            self
        }
        pub fn place(mut self, kind: PlaceKind, value: &str) -> Self {
            self.query.places.push(Place::new(kind, value));
            self
        }
        pub fn municipality(self, value: &str) -> Self {
            self.place(PlaceKind::Municipality, value)
        }
        pub fn province(self, value: &str) -> Self {
            self.place(PlaceKind::CountrySecondarySubdivision, value)
        }
        pub fn postal_code(mut self, x: &str) -> Self {
            self.query.postal_code = Some(x.into());
            self
        }
        pub fn finish(self) -> AddressQuery {
            self.query
        }
    }

    impl Builder for AddressQuery {
        type Build = AddressQueryBuild;
        fn build() -> Self::Build {
            AddressQueryBuild {
                query: AddressQuery {
                    country_code: "IT".into(),
                    ..Default::default()
                },
            }
        }
    }

    #[test]
    fn build_street_address_lazily() {
        let q = AddressQuery::build().finish();
        assert_eq!(q.country_code, "IT");
        assert!(q.street_address.is_none());
        let q = AddressQuery::build()
            .street("Via Roma")
            .building("12", Some("B"))
            .finish();
        let street_address = q.street_address.unwrap();
        assert_eq!(street_address.streets.len(), 1);
        assert_eq!(
            street_address.building.unwrap().subdivision.as_deref(),
            Some("B")
        );
    }
}

pub mod raw_answer_builder {

    use super::*;
    use crate::{geo::*, normalization::*};

    #[derive(Debug)]
    pub struct RawAnswerBuild {
        answer: RawAnswer,
    }

    impl RawAnswerBuild {
        pub fn response_code(mut self, code: &str) -> Self {
            self.answer.response_code = code.into();
            self
        }
        pub fn recognized(mut self, pos: Coordinates, normalized: NormalizedStreetData) -> Self {
            self.answer.recognized_address = Some(RecognizedAddress { pos, normalized });
            self
        }
        pub fn ambiguous_item(mut self, pos: Coordinates, address: &str, nr: Option<&str>) -> Self {
            let ambiguous = self
                .answer
                .ambiguous_address
                .get_or_insert_with(Default::default);
            ambiguous.items.push(AmbiguousAddressItem {
                pos,
                address: address.into(),
                house_number: nr.map(Into::into),
            });
            ambiguous.reported_count = ambiguous.items.len();
            self
        }
        pub fn reported_count(mut self, count: usize) -> Self {
            self.answer
                .ambiguous_address
                .get_or_insert_with(Default::default)
                .reported_count = count;
            self
        }
        pub fn locality(mut self, locality: NormalizedLocality) -> Self {
            self.answer.normalized_locality = Some(locality);
            self
        }
        pub fn finish(self) -> RawAnswer {
            self.answer
        }
    }

    impl Builder for RawAnswer {
        type Build = RawAnswerBuild;
        fn build() -> Self::Build {
            RawAnswerBuild {
                answer: RawAnswer::default(),
            }
        }
    }

    #[test]
    fn count_follows_items() {
        let answer = RawAnswer::build()
            .response_code("7")
            .ambiguous_item(Coordinates::from_lng_lat(1.0, 2.0), "Via A", None)
            .ambiguous_item(Coordinates::from_lng_lat(3.0, 4.0), "Via B", Some("3"))
            .finish();
        assert_eq!(answer.ambiguous_address.unwrap().reported_count, 2);
    }
}
