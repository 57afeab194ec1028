#![no_main]
// Point decoding and group laws on the registered curves
use curves::{ByteOrder, Curve, CurveName, Point, PointEncoding, Uint};
use libfuzzer_sys::fuzz_target;

fn test_group(p1: Point<'_, 9>, p2: Point<'_, 9>, k: &Uint<9>) {
    let sum = p1.add(&p2).unwrap();

    // Commutativity and doubling
    assert_eq!(sum, p2.add(&p1).unwrap());
    assert_eq!(p1.double(), p1.add(&p1).unwrap());

    // Negation
    assert!(bool::from(sum.add(&sum.neg()).unwrap().is_identity()));
    assert_eq!(sum.sub(&p2).unwrap(), p1);

    // Scalar multiplication distributes over point addition
    assert_eq!(
        sum.scalar_mul(k).unwrap(),
        p1.scalar_mul(k).unwrap().add(&p2.scalar_mul(k).unwrap()).unwrap()
    );
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 32 {
        return;
    }

    for name in CurveName::ALL {
        let curve = Curve::<9>::named(name).unwrap();

        // Decoding either fails cleanly or yields a point whose encoding
        // reproduces the input.
        for order in [ByteOrder::BigEndian, ByteOrder::LittleEndian] {
            let Ok(point) = Point::from_bytes(&curve, data, order) else {
                continue;
            };
            assert!(bool::from(point.is_on_curve()));

            let encoding = match data.len() == curve.encoded_len(PointEncoding::Compressed) {
                true => PointEncoding::Compressed,
                false => PointEncoding::Uncompressed,
            };
            let mut out = [0u8; 144];
            let len = point.to_bytes(encoding, order, &mut out).unwrap();
            assert_eq!(&out[..len], data);
        }

        let scalar = |bytes: &[u8]| Uint::from_be_slice(bytes).unwrap().rem(curve.order()).unwrap();
        let p1 = curve.mul_generator(&scalar(&data[..16])).unwrap();
        let p2 = curve.mul_generator(&scalar(&data[16..32])).unwrap();
        test_group(p1, p2, &scalar(&data[..32]));
    }
});
