//! Identity, upcast and re-cast laws over arbitrary values.

use proptest::prelude::*;
use rtrait::prelude::*;
use rtrait_testhelpers::same_address;

interface! {
    pub trait Magnitude {
        fn magnitude(&self) -> u64;
    }
}

interface! {
    pub trait Signed: Magnitude {
        fn negative(&self) -> bool;
    }
}

impl Magnitude for i64 {
    fn magnitude(&self) -> u64 {
        self.unsigned_abs()
    }
}

impl Signed for i64 {
    fn negative(&self) -> bool {
        *self < 0
    }
}

impl Magnitude for String {
    fn magnitude(&self) -> u64 {
        self.len() as u64
    }
}

impl Magnitude for Vec<u8> {
    fn magnitude(&self) -> u64 {
        self.iter().map(|&byte| u64::from(byte)).sum()
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        failure_persistence: None,
        ..ProptestConfig::default()
    })]

    #[test]
    fn downcast_returns_the_erased_value(value in any::<i64>(), text in "[a-z]{0,16}") {
        rtrait_testhelpers::setup();

        let number = InterfaceRef::<dyn Magnitude>::new(&value);
        prop_assert!(same_address(number.downcast::<i64>().unwrap(), &value));
        prop_assert!(number.downcast::<String>().is_err());

        let word = InterfaceRef::<dyn Magnitude>::from(&text);
        prop_assert!(same_address(word.downcast::<String>().unwrap(), &text));
        prop_assert_eq!(word.magnitude(), text.len() as u64);
    }

    #[test]
    fn upcasting_agrees_with_direct_resolution(value in any::<i64>()) {
        let signed = InterfaceRef::<dyn Signed>::new(&value);
        let upcast: InterfaceRef<'_, dyn Magnitude> = signed.upcast();
        let direct = InterfaceRef::<dyn Magnitude>::new(&value);

        prop_assert_eq!(upcast.magnitude(), direct.magnitude());
        prop_assert_eq!(signed.negative(), value < 0);
        prop_assert_eq!(upcast.self_type(), direct.self_type());
        prop_assert!(same_address(upcast.downcast::<i64>().unwrap(), &value));
    }

    #[test]
    fn recast_is_idempotent(value in any::<i64>()) {
        let signed = value.to_interface::<dyn Signed>();
        let once = signed.recast::<dyn Magnitude>();
        let twice = signed.recast::<dyn Signed>().recast::<dyn Magnitude>();

        prop_assert_eq!(once.magnitude(), twice.magnitude());
        prop_assert!(same_address(once.this(), twice.this()));
        prop_assert!(same_address(once.this(), &value));

        let erased = InterfaceRef::<dyn Signed>::new(&value);
        let again = erased.recast::<dyn Magnitude>();
        prop_assert_eq!(again.magnitude(), value.unsigned_abs());
        prop_assert!(same_address(again.this(), &erased));
    }

    #[test]
    fn owned_values_come_back_unchanged(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let expected = bytes.clone();
        let handle = own::<dyn Magnitude, _>(bytes);
        prop_assert_eq!(handle.magnitude(), expected.iter().map(|&b| u64::from(b)).sum::<u64>());
        prop_assert_eq!(handle.downcast_ref::<Vec<u8>>().unwrap(), &expected);

        let back = handle.downcast::<Vec<u8>>().ok().unwrap();
        prop_assert_eq!(*back, expected);
    }
}
