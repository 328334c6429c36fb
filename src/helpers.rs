#[macro_export]
macro_rules! ensure_same_shape {
    ($lhs: expr, $rhs: expr) => {
        if $lhs.shape() != $rhs.shape() {
            return Err($crate::MatrixError::DimensionMismatch {
                left: $lhs.shape(),
                right: $rhs.shape(),
            });
        }
    };
}

#[macro_export]
macro_rules! dbg_display {
    ($e: expr) => {{
        let val = $e;
        log::debug!(
            "[{}/{}:{}] {} =\n{}",
            file!(),
            line!(),
            column!(),
            stringify!($e),
            val
        );
        val
    }};
}
