use rideboard::catalog::sample_vehicles;
use rideboard::domain::filter_vehicles;
use rideboard::{
    handle_event, AppState, Event, FilterDimension, FilterState, SortOrder, Theme, TypeFilter,
    Vehicle, VehicleType,
};

fn session() -> AppState {
    AppState::new(sample_vehicles(), Theme::default())
}

fn names(vehicles: &[Vehicle]) -> Vec<&str> {
    vehicles.iter().map(|v| v.name.as_str()).collect()
}

#[test]
fn price_range_up_to_thirty() {
    let mut state = session();
    handle_event(&mut state, &Event::SetPriceRange { min: 0.0, max: 30.0 }).unwrap();

    assert_eq!(names(&state.filtered_vehicles), ["Economy Sedan", "Economy Compact"]);
}

#[test]
fn luxury_only() {
    let mut state = session();
    handle_event(
        &mut state,
        &Event::SetVehicleType(TypeFilter::Only(VehicleType::Luxury)),
    )
    .unwrap();

    assert_eq!(names(&state.filtered_vehicles), ["Luxury SUV", "Luxury Limousine"]);
}

#[test]
fn arrival_bound_is_inclusive() {
    let mut state = session();
    handle_event(&mut state, &Event::SetMaxArrivalTime(10)).unwrap();

    assert_eq!(
        names(&state.filtered_vehicles),
        ["Economy Sedan", "Premium Sedan", "Economy Compact"]
    );
}

#[test]
fn rating_bound_is_inclusive() {
    let mut state = session();
    handle_event(&mut state, &Event::SetMinRating(4.8)).unwrap();

    assert_eq!(
        names(&state.filtered_vehicles),
        ["Premium Sedan", "Luxury SUV", "Luxury Limousine"]
    );
}

#[test]
fn empty_result_then_reset_restores_everything() {
    let mut state = session();
    handle_event(&mut state, &Event::SetPriceRange { min: 0.0, max: 10.0 }).unwrap();
    assert!(state.filtered_vehicles.is_empty());
    assert!(state.compute_viewmodel(24, 80).empty_state.is_some());

    handle_event(&mut state, &Event::ResetFilters).unwrap();
    assert_eq!(state.filtered_vehicles, sample_vehicles());
    assert!(state.filters.active_dimensions().is_empty());
}

#[test]
fn every_filter_state_is_sound_and_complete() {
    let source = sample_vehicles();
    let prices = [0.0, 20.0, 25.0, 45.0, 50.0, 95.0, 100.0];
    let types = [
        TypeFilter::All,
        TypeFilter::Only(VehicleType::Economy),
        TypeFilter::Only(VehicleType::Standard),
        TypeFilter::Only(VehicleType::Premium),
        TypeFilter::Only(VehicleType::Luxury),
    ];
    let arrivals = [0, 5, 10, 14, 30, 120];
    let ratings = [0.0, 4.0, 4.5, 4.8, 5.0];

    for &min in &prices {
        for &max in prices.iter().filter(|&&max| max >= min) {
            for &selection in &types {
                for &arrival in &arrivals {
                    for &rating in &ratings {
                        let mut filters = FilterState::default();
                        filters.set_price_range(min, max).unwrap();
                        filters.set_vehicle_type(selection);
                        filters.set_max_arrival_time(arrival);
                        filters.set_min_rating(rating).unwrap();

                        let expected: Vec<&Vehicle> = source
                            .iter()
                            .filter(|v| {
                                v.price >= min
                                    && v.price <= max
                                    && match selection {
                                        TypeFilter::All => true,
                                        TypeFilter::Only(t) => v.vehicle_type == t,
                                    }
                                    && v.arrival_time <= arrival
                                    && v.rating >= rating
                            })
                            .collect();
                        let actual = filter_vehicles(&source, &filters);

                        assert_eq!(
                            actual.iter().collect::<Vec<_>>(),
                            expected,
                            "filters {filters:?}"
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn filtering_is_idempotent() {
    let mut filters = FilterState::default();
    filters.set_price_range(20.0, 70.0).unwrap();
    filters.set_min_rating(4.3).unwrap();

    let source = sample_vehicles();
    let once = filter_vehicles(&source, &filters);
    let twice = filter_vehicles(&source, &filters);
    assert_eq!(once, twice);
}

#[test]
fn resending_the_same_filter_keeps_the_order() {
    let mut state = session();
    handle_event(&mut state, &Event::SetMaxArrivalTime(20)).unwrap();
    handle_event(&mut state, &Event::Sort(SortOrder::PriceDescending)).unwrap();
    let sorted = state.filtered_vehicles.clone();

    let (rerender, _) = handle_event(&mut state, &Event::SetMaxArrivalTime(20)).unwrap();
    assert!(!rerender);
    assert_eq!(state.filtered_vehicles, sorted);
    assert_eq!(state.active_sort, Some(SortOrder::PriceDescending));
}

#[test]
fn sort_is_dropped_by_the_next_filter_change() {
    let mut state = session();
    handle_event(&mut state, &Event::Sort(SortOrder::RatingDescending)).unwrap();
    assert_eq!(state.filtered_vehicles[0].name, "Luxury Limousine");
    assert_eq!(state.active_sort, Some(SortOrder::RatingDescending));

    handle_event(&mut state, &Event::SetMaxArrivalTime(20)).unwrap();
    assert_eq!(state.active_sort, None);
    assert_eq!(
        names(&state.filtered_vehicles),
        [
            "Economy Sedan",
            "Standard SUV",
            "Premium Sedan",
            "Luxury SUV",
            "Economy Compact",
            "Standard Minivan",
            "Premium Electric",
        ]
    );
}

#[test]
fn price_sorts_are_reverses_of_each_other() {
    let mut state = session();
    handle_event(&mut state, &Event::Sort(SortOrder::PriceAscending)).unwrap();
    let ascending = names(&state.filtered_vehicles)
        .into_iter()
        .map(String::from)
        .collect::<Vec<_>>();

    handle_event(&mut state, &Event::Sort(SortOrder::PriceDescending)).unwrap();
    let mut descending = names(&state.filtered_vehicles)
        .into_iter()
        .map(String::from)
        .collect::<Vec<_>>();
    descending.reverse();

    assert_eq!(ascending, descending);
}

#[test]
fn removing_a_badge_resets_only_its_dimension() {
    let mut state = session();
    handle_event(&mut state, &Event::SetPriceRange { min: 0.0, max: 60.0 }).unwrap();
    handle_event(&mut state, &Event::SetMinRating(4.5)).unwrap();
    assert_eq!(names(&state.filtered_vehicles), ["Standard SUV", "Premium Sedan"]);

    handle_event(&mut state, &Event::RemoveBadge(FilterDimension::Price)).unwrap();
    assert!((state.filters.min_rating() - 4.5).abs() < f64::EPSILON);
    assert_eq!(
        names(&state.filtered_vehicles),
        [
            "Standard SUV",
            "Premium Sedan",
            "Luxury SUV",
            "Premium Electric",
            "Luxury Limousine",
        ]
    );
}

#[test]
fn invalid_input_leaves_state_untouched() {
    let mut state = session();
    handle_event(&mut state, &Event::SetVehicleType(TypeFilter::Only(VehicleType::Premium)))
        .unwrap();
    let before = state.clone();

    assert!(handle_event(&mut state, &Event::SetPriceRange { min: 60.0, max: 10.0 }).is_err());
    assert!(handle_event(&mut state, &Event::SetMinRating(-1.0)).is_err());
    assert!(handle_event(&mut state, &Event::SetPriceRange { min: 0.0, max: f64::NAN }).is_err());

    assert_eq!(state.filters, before.filters);
    assert_eq!(state.filtered_vehicles, before.filtered_vehicles);
}
