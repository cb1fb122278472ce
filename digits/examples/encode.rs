use num_bigint::BigUint;
fn main() {
    let ints: Vec<BigUint> = vec![
        0u32.into(),
        1u32.into(),
        255u32.into(),
        256u32.into(),
        65535u32.into(),
        65536u32.into(),
        0xff0000000000u64.into(),
        u128::MAX.into(),
    ];
    for int in ints {
        println!("{}", int);
        let digits = digits::to_be_digits(&int);
        println!("{:?}", digits);
        println!("{:?}", digits::encode(&int));
        println!("{}", digits::from_be_digits(&digits));
        println!()
    }
}
