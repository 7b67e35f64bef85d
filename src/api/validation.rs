use crate::core::{FunnelValues, Margin, Viewport};
use crate::error::FunnelResult;

pub(super) fn validate_values(values: FunnelValues) -> FunnelResult<FunnelValues> {
    let values = values.normalized();
    values.validate()?;
    Ok(values)
}

pub(super) fn validate_plot_size(width: f64, height: f64) -> FunnelResult<Viewport> {
    Viewport::new(width, height).validate()
}

pub(super) fn validate_margin(margin: Margin) -> FunnelResult<Margin> {
    margin.validate()
}
