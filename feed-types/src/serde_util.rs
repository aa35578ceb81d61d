// SPDX-License-Identifier: GPL-3.0-only

use serde::{Deserialize, Deserializer};

/// The feed manager sends explicit `null` for unset scalars; treat it as the default.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
