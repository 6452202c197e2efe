use crate::country::country_for_query;
use crate::fallback::FallbackKnowledgeBase;
use crate::query::CarQuery;
use crate::spec::{Attribute, NOT_AVAILABLE, VehicleSpec};

/// Fills absent tracked attributes of `partial` from the knowledge base.
///
/// Present attributes are never overwritten. When no record matches, tracked attributes are
/// left as they are; the country is resolved from the brand table either way.
pub fn merge(mut partial: VehicleSpec, query: &CarQuery, kb: &FallbackKnowledgeBase) -> VehicleSpec {
    match kb.lookup(&query.key(), query.brand()) {
        Some(record) => {
            let mut filled = 0usize;
            for attribute in Attribute::TRACKED {
                if partial.contains(attribute) {
                    continue;
                }
                let value = record.get(attribute);
                partial.set(
                    attribute,
                    if value.trim().is_empty() {
                        NOT_AVAILABLE
                    } else {
                        value
                    },
                );
                filled += 1;
            }
            tracing::info!(record = %record.key, filled, "filled missing specs from fallback");
        }
        None => tracing::debug!(query = %query, "no fallback record"),
    }
    resolve_country(&mut partial, query);
    partial
}

/// Produces the spec handed to the poster renderer.
///
/// An extraction that found nothing at all is replaced by `{model: query}` overlaid with the
/// exact-match record (model and country included). Otherwise this is [`merge`]. A missing
/// model falls back to the query text.
pub fn complete(partial: VehicleSpec, query: &CarQuery, kb: &FallbackKnowledgeBase) -> VehicleSpec {
    let nothing_extracted = !partial.contains(Attribute::Model) && partial.tracked_count() == 0;
    let mut spec = if nothing_extracted {
        let mut spec = VehicleSpec::new().with(Attribute::Model, query.text());
        if let Some(record) = kb.exact(&query.key()) {
            tracing::info!(record = %record.key, "extraction empty; using fallback record");
            for attribute in Attribute::ALL {
                spec.set(attribute, record.get(attribute));
            }
        }
        resolve_country(&mut spec, query);
        spec
    } else {
        merge(partial, query, kb)
    };
    if !spec.contains(Attribute::Model) {
        spec.set(Attribute::Model, query.text());
    }
    spec
}

fn resolve_country(spec: &mut VehicleSpec, query: &CarQuery) {
    if spec.contains(Attribute::Country) {
        return;
    }
    match country_for_query(query.text()) {
        Some(country) => spec.set(Attribute::Country, country.as_str()),
        None => tracing::debug!(brand = query.brand(), "unknown brand; no country"),
    }
}
