use lens_select::lens::{facing_for_lollipop, facing_for_m};
use lens_select::{
    AccessError, ApiLevel, CameraSelector, DeviceProfile, LensFacing, LensPosition,
    MockCameraManager, ProfileCameraManager, SelectorError,
};
use proptest::prelude::*;

fn lens_position() -> impl Strategy<Value = LensPosition> {
    prop_oneof![
        Just(LensPosition::Front),
        Just(LensPosition::Back),
        Just(LensPosition::External),
    ]
}

/// Raw facings including values the platform may report but no position uses.
fn raw_facing() -> impl Strategy<Value = i32> {
    prop_oneof![Just(0), Just(1), Just(2), -3i32..10]
}

fn inventory(facings: &[i32]) -> MockCameraManager {
    facings
        .iter()
        .enumerate()
        .fold(MockCameraManager::new(), |manager, (i, raw)| {
            manager.with_camera(i.to_string(), LensFacing::from_raw(*raw))
        })
}

proptest! {
    #[test]
    fn single_match_found_at_any_index(
        others in proptest::collection::vec(
            prop_oneof![Just(LensFacing::BACK.raw()), Just(LensFacing::EXTERNAL.raw()), 3i32..10],
            0..12,
        ),
        index in any::<prop::sample::Index>(),
    ) {
        let mut facings = others;
        let at = index.index(facings.len() + 1);
        facings.insert(at, LensFacing::FRONT.raw());

        let selector = CameraSelector::new(inventory(&facings));
        let id = selector.find_camera_id(LensPosition::Front).unwrap();
        prop_assert_eq!(id.as_str(), at.to_string());
    }

    #[test]
    fn first_match_in_enumeration_order(
        facings in proptest::collection::vec(raw_facing(), 0..16),
        position in lens_position(),
    ) {
        let wanted = facing_for_m(position).unwrap().raw();
        let selector = CameraSelector::new(inventory(&facings));

        match facings.iter().position(|raw| *raw == wanted) {
            Some(first) => {
                let id = selector.find_camera_id(position).unwrap();
                prop_assert_eq!(id.as_str(), first.to_string());
                prop_assert_eq!(selector.manager().characteristics_queries(), first + 1);
            }
            None => {
                prop_assert_eq!(
                    selector.find_camera_id(position),
                    Err(SelectorError::NoCameraFound { position })
                );
                prop_assert_eq!(selector.manager().characteristics_queries(), facings.len());
            }
        }
    }

    #[test]
    fn id_list_failure_examines_nothing(
        facings in proptest::collection::vec(raw_facing(), 0..8),
        position in lens_position(),
    ) {
        let error = AccessError::Error("enumeration failed".into());
        let manager = inventory(&facings).fail_id_list(error.clone());
        let selector = CameraSelector::new(manager);

        prop_assert_eq!(selector.find_camera_id(position), Err(SelectorError::Access(error)));
        prop_assert_eq!(selector.manager().characteristics_queries(), 0);
    }

    #[test]
    fn tier_tables_agree_on_front_and_back(level in 21u32..40) {
        let selector = CameraSelector::new(MockCameraManager::new().with_api_level(ApiLevel(level)));

        prop_assert!(selector.supports(LensPosition::Front));
        prop_assert!(selector.supports(LensPosition::Back));
        prop_assert_eq!(selector.supports(LensPosition::External), level >= 23);
        prop_assert_eq!(facing_for_lollipop(LensPosition::Front), facing_for_m(LensPosition::Front));
        prop_assert_eq!(facing_for_lollipop(LensPosition::Back), facing_for_m(LensPosition::Back));
    }
}

#[test]
fn two_camera_phone_example() {
    let manager = MockCameraManager::new()
        .with_camera("0", LensFacing::BACK)
        .with_camera("1", LensFacing::FRONT);
    let selector = CameraSelector::new(manager);

    assert_eq!(selector.find_camera_id(LensPosition::Front).unwrap(), "1");
}

#[test]
#[should_panic(expected = "EXTERNAL")]
fn external_on_old_tier_panics() {
    let manager = MockCameraManager::new()
        .with_api_level(ApiLevel::LOLLIPOP)
        .with_camera("0", LensFacing::BACK);
    let _ = CameraSelector::new(manager).find_camera_id(LensPosition::External);
}

#[test]
fn profile_backed_selection() {
    let profile = DeviceProfile::from_toml_str(
        r#"
        api_level = 30

        [[cameras]]
        id = "0"
        lens_facing = 1

        [[cameras]]
        id = "1"
        lens_facing = 0

        [[cameras]]
        id = "usb-0"
        lens_facing = 2
        "#,
    )
    .unwrap();
    let selector = CameraSelector::new(ProfileCameraManager::new(profile).unwrap());

    assert_eq!(selector.find_camera_id(LensPosition::External).unwrap(), "usb-0");
    assert_eq!(selector.find_camera_id(LensPosition::Back).unwrap(), "0");

    let listed: Vec<_> = selector
        .list_cameras()
        .unwrap()
        .into_iter()
        .map(|camera| (camera.id.into_inner(), camera.position))
        .collect();
    assert_eq!(
        listed,
        vec![
            ("0".to_string(), Some(LensPosition::Back)),
            ("1".to_string(), Some(LensPosition::Front)),
            ("usb-0".to_string(), Some(LensPosition::External)),
        ]
    );
}
