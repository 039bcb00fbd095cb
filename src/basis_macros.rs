/// Implements [`Basis`](crate::basis::Basis) for a unit struct.
///
/// The matrix is written unscaled, one row per power of `t` starting at
/// `t⁰`, and every entry is multiplied by `scale`.
macro_rules! cubic_basis {
    (
        $basis:ident, $name:literal, scale = $scale:expr,
        [$([$a:expr, $b:expr, $c:expr, $d:expr]),+ $(,)?]
    ) => {
        impl Basis for $basis {
            const NAME: &'static str = $name;
            const MATRIX: [[f64; 4]; 4] = [
                $([$a * $scale, $b * $scale, $c * $scale, $d * $scale]),+
            ];
        }
    };
}
