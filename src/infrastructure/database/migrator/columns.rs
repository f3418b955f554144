//! Column groups shared by several tables.
//!
//! Value objects are flattened into their owner's row as
//! `<prefix>_<field>` columns; every identified resource carries the same
//! identity and link columns.

use sea_orm_migration::prelude::*;

#[derive(Iden)]
pub enum ObjectColumn {
    Id,
    Description,
    Published,
    Updated,
    SelfLinkHref,
    SelfLinkRel,
    UpLinkHref,
    UpLinkRel,
}

fn named(prefix: &str, field: &str) -> Alias {
    Alias::new(format!("{prefix}_{field}"))
}

/// Identity and Atom link columns of an identified resource.
pub fn identified_object(table: &mut TableCreateStatement) -> &mut TableCreateStatement {
    table
        .col(
            ColumnDef::new(ObjectColumn::Id)
                .uuid()
                .not_null()
                .primary_key(),
        )
        .col(ColumnDef::new(ObjectColumn::Description).string())
        .col(ColumnDef::new(ObjectColumn::Published).timestamp_with_time_zone())
        .col(ColumnDef::new(ObjectColumn::Updated).timestamp_with_time_zone())
        .col(ColumnDef::new(ObjectColumn::SelfLinkHref).string())
        .col(ColumnDef::new(ObjectColumn::SelfLinkRel).string())
        .col(ColumnDef::new(ObjectColumn::UpLinkHref).string())
        .col(ColumnDef::new(ObjectColumn::UpLinkRel).string())
}

/// Surrogate key for rows without identity of their own.
pub fn serial_id<T: IntoIden>(table: &mut TableCreateStatement, id: T) -> &mut TableCreateStatement {
    table.col(
        ColumnDef::new(id)
            .integer()
            .not_null()
            .auto_increment()
            .primary_key(),
    )
}

pub fn interval<'a>(table: &'a mut TableCreateStatement, prefix: &str) -> &'a mut TableCreateStatement {
    table
        .col(ColumnDef::new(named(prefix, "start")).big_integer())
        .col(ColumnDef::new(named(prefix, "duration")).big_integer())
}

pub fn measurement<'a>(
    table: &'a mut TableCreateStatement,
    prefix: &str,
) -> &'a mut TableCreateStatement {
    table
        .col(ColumnDef::new(named(prefix, "multiplier")).integer())
        .col(ColumnDef::new(named(prefix, "uom")).integer())
        .col(ColumnDef::new(named(prefix, "value")).big_integer())
        .col(ColumnDef::new(named(prefix, "time_stamp")).big_integer())
        .col(ColumnDef::new(named(prefix, "reading_type_ref")).string())
}

pub fn status<'a>(table: &'a mut TableCreateStatement, prefix: &str) -> &'a mut TableCreateStatement {
    table
        .col(ColumnDef::new(named(prefix, "value")).string())
        .col(ColumnDef::new(named(prefix, "date_time")).big_integer())
        .col(ColumnDef::new(named(prefix, "remark")).string())
        .col(ColumnDef::new(named(prefix, "reason")).string())
}

pub fn street_address<'a>(
    table: &'a mut TableCreateStatement,
    prefix: &str,
) -> &'a mut TableCreateStatement {
    for field in [
        "street_number",
        "street_name",
        "street_suffix",
        "suite_number",
        "town_code",
        "town_name",
        "state_or_province",
        "country",
        "postal_code",
    ] {
        table.col(ColumnDef::new(named(prefix, field)).string());
    }
    status(table, &format!("{prefix}_status"))
}

pub fn telephone<'a>(
    table: &'a mut TableCreateStatement,
    prefix: &str,
) -> &'a mut TableCreateStatement {
    for field in ["country_code", "area_code", "local_number", "ext"] {
        table.col(ColumnDef::new(named(prefix, field)).string());
    }
    table
}

pub fn electronic_address<'a>(
    table: &'a mut TableCreateStatement,
    prefix: &str,
) -> &'a mut TableCreateStatement {
    for field in ["email1", "email2", "web", "lan"] {
        table.col(ColumnDef::new(named(prefix, field)).string());
    }
    table
}

pub fn organisation<'a>(
    table: &'a mut TableCreateStatement,
    prefix: &str,
) -> &'a mut TableCreateStatement {
    table.col(ColumnDef::new(named(prefix, "name")).string());
    street_address(table, &format!("{prefix}_address"));
    telephone(table, &format!("{prefix}_phone1"));
    electronic_address(table, &format!("{prefix}_electronic_address"))
}

/// Columns shared by every business document.
pub fn document(table: &mut TableCreateStatement) -> &mut TableCreateStatement {
    table
        .col(ColumnDef::new(Alias::new("created_date_time")).big_integer())
        .col(ColumnDef::new(Alias::new("last_modified_date_time")).big_integer())
        .col(ColumnDef::new(Alias::new("revision_number")).string())
        .col(ColumnDef::new(Alias::new("subject")).string())
        .col(ColumnDef::new(Alias::new("title")).string())
        .col(ColumnDef::new(Alias::new("doc_type")).string());
    electronic_address(table, "electronic_address");
    status(table, "status")
}

/// Foreign key from `table.column` to the identity column of `target`.
pub fn references<T, C, R>(
    name: &str,
    table: T,
    column: C,
    target: R,
    on_delete: ForeignKeyAction,
) -> ForeignKeyCreateStatement
where
    T: IntoTableRef,
    C: IntoIden,
    R: IntoTableRef,
{
    ForeignKey::create()
        .name(name)
        .from(table, column)
        .to(target, ObjectColumn::Id)
        .on_delete(on_delete)
        .to_owned()
}
