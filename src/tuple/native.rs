//! Element access and size for Rust's native tuples.
//!
//! These impls let generic code written against [`TupleGet`] and
//! [`TupleSize`] accept `(A, B, ..)` values directly, up to eight elements.

use typenum::consts::{U0, U1, U2, U3, U4, U5, U6, U7, U8};

use super::{TupleGet, TupleSize};

macro_rules! impl_native_get {
    (@one [$($T:ident),+], $index:tt, $Index:ty, $Out:ident) => {
        impl<$($T),+> TupleGet<$Index> for ($($T,)+) {
            type Output = $Out;

            #[inline]
            fn get(self) -> $Out {
                self.$index
            }
        }

        impl<'a, $($T),+> TupleGet<$Index> for &'a ($($T,)+) {
            type Output = &'a $Out;

            #[inline]
            fn get(self) -> &'a $Out {
                &self.$index
            }
        }

        impl<'a, $($T),+> TupleGet<$Index> for &'a mut ($($T,)+) {
            type Output = &'a mut $Out;

            #[inline]
            fn get(self) -> &'a mut $Out {
                &mut self.$index
            }
        }
    };
    (@size [$($T:ident),+], $Len:ty) => {
        impl<$($T),+> TupleSize for ($($T,)+) {
            type Len = $Len;
        }
    };
    ($generics:tt, $Len:ty => $(($index:tt, $Index:ty, $Out:ident)),+) => {
        $(impl_native_get!(@one $generics, $index, $Index, $Out);)+
        impl_native_get!(@size $generics, $Len);
    };
}

impl TupleSize for () {
    type Len = U0;
}

impl_native_get!([A], U1 => (0, U0, A));
impl_native_get!([A, B], U2 => (0, U0, A), (1, U1, B));
impl_native_get!([A, B, C], U3 => (0, U0, A), (1, U1, B), (2, U2, C));
impl_native_get!([A, B, C, D], U4 => (0, U0, A), (1, U1, B), (2, U2, C), (3, U3, D));
impl_native_get!(
    [A, B, C, D, E], U5 =>
    (0, U0, A), (1, U1, B), (2, U2, C), (3, U3, D), (4, U4, E)
);
impl_native_get!(
    [A, B, C, D, E, F], U6 =>
    (0, U0, A), (1, U1, B), (2, U2, C), (3, U3, D), (4, U4, E), (5, U5, F)
);
impl_native_get!(
    [A, B, C, D, E, F, G], U7 =>
    (0, U0, A), (1, U1, B), (2, U2, C), (3, U3, D), (4, U4, E), (5, U5, F), (6, U6, G)
);
impl_native_get!(
    [A, B, C, D, E, F, G, H], U8 =>
    (0, U0, A), (1, U1, B), (2, U2, C), (3, U3, D), (4, U4, E), (5, U5, F), (6, U6, G),
    (7, U7, H)
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuple::get;
    use rstest::rstest;

    #[rstest]
    fn test_native_get_by_value_and_reference() {
        let mut pair = (1, String::from("one"));
        assert_eq!(get::<U0, _>(&pair), &1);
        get::<U1, _>(&mut pair).push('!');
        assert_eq!(get::<U1, _>(pair), "one!");
    }

    #[rstest]
    fn test_native_get_last_of_eight() {
        let values = (0, 1, 2, 3, 4, 5, 6, 'h');
        assert_eq!(get::<U7, _>(values), 'h');
    }

    #[rstest]
    #[case(<() as TupleSize>::SIZE, 0)]
    #[case(<(u8,) as TupleSize>::SIZE, 1)]
    #[case(<(u8, u8, u8, u8, u8) as TupleSize>::SIZE, 5)]
    #[case(<&(u8, u8) as TupleSize>::SIZE, 2)]
    fn test_native_size(#[case] actual: usize, #[case] expected: usize) {
        assert_eq!(actual, expected);
    }
}
