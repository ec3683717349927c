// SPDX-License-Identifier: AGPL-3.0-or-later

//! Builds the addressing path of an operation from the addressing fields of its bag.
use log::trace;

use crate::cdt::{Context, ContextStep, ListOrder, MapOrder};
use crate::convert::coerce;
use crate::convert::error::InvalidOperationError;
use crate::convert::keys;
use crate::plain::PlainFields;

fn step(fields: &PlainFields, name: &str) -> Result<ContextStep, InvalidOperationError> {
    let step = match name {
        keys::LIST_INDEX => ContextStep::ListIndex(coerce::int(fields, name)?),
        keys::LIST_INDEX_CREATE => ContextStep::ListIndexCreate {
            index: coerce::int(fields, name)?,
            order: coerce::optional_symbol::<ListOrder>(fields, keys::LIST_ORDER)?
                .unwrap_or_default(),
            pad: coerce::boolean(fields, keys::PAD)?,
        },
        keys::LIST_RANK => ContextStep::ListRank(coerce::int(fields, name)?),
        keys::LIST_VALUE => ContextStep::ListValue(coerce::nullable_value(fields, name)?),
        keys::MAP_INDEX => ContextStep::MapIndex(coerce::int(fields, name)?),
        keys::MAP_RANK => ContextStep::MapRank(coerce::int(fields, name)?),
        keys::MAP_KEY => ContextStep::MapKey(coerce::nullable_value(fields, name)?),
        keys::MAP_KEY_CREATE => ContextStep::MapKeyCreate {
            key: coerce::nullable_value(fields, name)?,
            order: coerce::optional_symbol::<MapOrder>(fields, keys::MAP_ORDER)?
                .unwrap_or_default(),
        },
        _ => ContextStep::MapValue(coerce::nullable_value(fields, name)?),
    };

    Ok(step)
}

/// Returns the addressing path given by the addressing fields of the bag.
///
/// Steps are ordered by the fixed order of `keys::ADDRESSING`, not by the order of the fields in
/// the request. Returns `None` when no addressing field is present.
pub fn build_context(fields: &PlainFields) -> Result<Option<Context>, InvalidOperationError> {
    let steps = keys::ADDRESSING
        .iter()
        .filter(|name| fields.contains(name))
        .map(|name| step(fields, name))
        .collect::<Result<Vec<ContextStep>, InvalidOperationError>>()?;

    trace!("Built context with {} steps", steps.len());

    Ok(Context::new(steps))
}
