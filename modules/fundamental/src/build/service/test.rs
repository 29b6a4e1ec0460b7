use super::*;
use crate::part::service::PartService;
use launchtrace_test_context::LaunchTraceContext;
use rstest::rstest;
use sea_orm::PaginatorTrait;
use test_context::test_context;
use test_log::test;
use time::macros::datetime;

fn request(serial_number: &str, part_ids: impl Into<Vec<i32>>) -> CreateBuildRequest {
    CreateBuildRequest {
        serial_number: serial_number.into(),
        build_date: datetime!(2024-04-01 12:00 UTC),
        part_ids: part_ids.into(),
    }
}

#[test_context(LaunchTraceContext)]
#[test(tokio::test)]
async fn list_builds(ctx: &LaunchTraceContext) -> Result<(), anyhow::Error> {
    ctx.seed_document("seed/acme.json").await?;

    let result = BuildService::new()
        .fetch_builds(Default::default(), &ctx.db)
        .await?;

    assert_eq!(result.total, 3);
    let counts = result
        .items
        .iter()
        .map(|b| {
            (
                b.head.serial_number.as_str(),
                b.part_count,
                b.faulty_part_count,
            )
        })
        .collect::<Vec<_>>();
    assert_eq!(counts, vec![("B001", 2, 1), ("B002", 2, 0), ("B003", 0, 0)]);

    assert_eq!(result.items[1].head.build_date, datetime!(2024-03-02 08:00 UTC));

    Ok(())
}

#[test_context(LaunchTraceContext)]
#[rstest]
#[case(0, 1, &[1])]
#[case(1, 5, &[2, 3])]
#[case(3, 5, &[])]
#[test_log::test(tokio::test)]
async fn paginate_builds(
    ctx: &LaunchTraceContext,
    #[case] skip: u64,
    #[case] take: u64,
    #[case] expected: &[i32],
) -> Result<(), anyhow::Error> {
    ctx.seed_document("seed/acme.json").await?;

    let result = BuildService::new()
        .fetch_builds(Paginated { skip, take }, &ctx.db)
        .await?;

    assert_eq!(result.total, 3);
    assert_eq!(
        result.items.iter().map(|b| b.head.build_id).collect::<Vec<_>>(),
        expected
    );

    Ok(())
}

#[test_context(LaunchTraceContext)]
#[test(tokio::test)]
async fn faulty_count_follows_flag(ctx: &LaunchTraceContext) -> Result<(), anyhow::Error> {
    ctx.seed_document("seed/acme.json").await?;

    PartService::new().flag_faulty(4, &ctx.db).await?;

    let build = BuildService::new()
        .fetch_build(2, &ctx.db)
        .await?
        .expect("must exist");
    assert_eq!(build.summary.part_count, 2);
    assert_eq!(build.summary.faulty_part_count, 1);

    Ok(())
}

#[test_context(LaunchTraceContext)]
#[test(tokio::test)]
async fn build_details(ctx: &LaunchTraceContext) -> Result<(), anyhow::Error> {
    ctx.seed_document("seed/acme.json").await?;

    let service = BuildService::new();

    let build = service.fetch_build(1, &ctx.db).await?.expect("must exist");
    assert_eq!(build.summary.head.serial_number, "B001");
    assert_eq!(build.summary.part_count, 2);
    assert_eq!(build.summary.faulty_part_count, 1);

    let parts = build
        .parts
        .iter()
        .map(|p| (p.part.part_id, p.part.status, p.quantity))
        .collect::<Vec<_>>();
    assert_eq!(
        parts,
        vec![(1, PartStatus::Ok, 5), (3, PartStatus::Faulty, 1)]
    );
    assert_eq!(build.parts[0].part.supplier.name, "Acme");

    let build = service.fetch_build(3, &ctx.db).await?.expect("must exist");
    assert_eq!(build.summary.part_count, 0);
    assert!(build.parts.is_empty());

    assert!(service.fetch_build(42, &ctx.db).await?.is_none());

    Ok(())
}

#[test_context(LaunchTraceContext)]
#[rstest]
#[case(1, &[1])]
#[case(2, &[2])]
#[case(5, &[])]
#[case(42, &[])]
#[test_log::test(tokio::test)]
async fn impacted_builds(
    ctx: &LaunchTraceContext,
    #[case] part_id: i32,
    #[case] expected: &[i32],
) -> Result<(), anyhow::Error> {
    ctx.seed_document("seed/acme.json").await?;

    let builds = BuildService::new()
        .fetch_impacted_builds(part_id, &ctx.db)
        .await?;

    assert_eq!(
        builds.iter().map(|b| b.build_id).collect::<Vec<_>>(),
        expected
    );

    Ok(())
}

#[test_context(LaunchTraceContext)]
#[test(tokio::test)]
async fn impacted_builds_ordered(ctx: &LaunchTraceContext) -> Result<(), anyhow::Error> {
    ctx.seed_document("seed/acme.json").await?;

    let service = BuildService::new();
    let created = service.create_build(request("B004", [5, 1]), &ctx.db).await?;

    let builds = service.fetch_impacted_builds(1, &ctx.db).await?;
    assert_eq!(
        builds.iter().map(|b| b.build_id).collect::<Vec<_>>(),
        vec![1, created.build_id]
    );
    assert_eq!(builds[1], created);

    Ok(())
}

#[test_context(LaunchTraceContext)]
#[test(tokio::test)]
async fn create_build(ctx: &LaunchTraceContext) -> Result<(), anyhow::Error> {
    ctx.seed_document("seed/acme.json").await?;

    let service = BuildService::new();
    let created = service
        .create_build(
            CreateBuildRequest {
                serial_number: "B100".into(),
                build_date: datetime!(2024-04-01 14:00:00.123456789 +02:00),
                part_ids: vec![3, 1, 2],
            },
            &ctx.db,
        )
        .await?;

    assert!(created.build_id > 3);
    assert_eq!(created.serial_number, "B100");
    assert_eq!(created.build_date, datetime!(2024-04-01 12:00:00.123456 UTC));

    let build = service
        .fetch_build(created.build_id, &ctx.db)
        .await?
        .expect("must exist");
    assert_eq!(build.summary.head, created);
    assert_eq!(build.summary.part_count, 3);
    assert_eq!(build.summary.faulty_part_count, 1);
    assert_eq!(
        build
            .parts
            .iter()
            .map(|p| (p.part.part_id, p.quantity))
            .collect::<Vec<_>>(),
        vec![(1, 0), (2, 0), (3, 0)]
    );

    Ok(())
}

#[test_context(LaunchTraceContext)]
#[test(tokio::test)]
async fn create_build_without_parts(ctx: &LaunchTraceContext) -> Result<(), anyhow::Error> {
    let service = BuildService::new();
    let created = service.create_build(request("B000", Vec::new()), &ctx.db).await?;

    let build = service
        .fetch_build(created.build_id, &ctx.db)
        .await?
        .expect("must exist");
    assert_eq!(build.summary.part_count, 0);
    assert_eq!(build.summary.faulty_part_count, 0);

    Ok(())
}

#[test_context(LaunchTraceContext)]
#[rstest]
#[case::unknown(vec![1, 42, 7], "Unknown part IDs", "42, 7")]
#[case::duplicate(vec![1, 2, 1, 2, 1], "Duplicate part IDs", "1, 2")]
#[test_log::test(tokio::test)]
async fn create_build_invalid_parts(
    ctx: &LaunchTraceContext,
    #[case] part_ids: Vec<i32>,
    #[case] message: &str,
    #[case] details: &str,
) -> Result<(), anyhow::Error> {
    ctx.seed_document("seed/acme.json").await?;

    let result = BuildService::new()
        .create_build(request("B999", part_ids), &ctx.db)
        .await;

    match result {
        Err(Error::BadRequest(msg, Some(ids))) => {
            assert_eq!(msg, message);
            assert_eq!(ids, details);
        }
        other => panic!("unexpected result: {other:?}"),
    }

    assert_eq!(build::Entity::find().count(&ctx.db).await?, 3);
    assert_eq!(build_part::Entity::find().count(&ctx.db).await?, 4);

    Ok(())
}

/// Store `count` parts of a single new supplier, returning their ids.
async fn bulk_parts(ctx: &LaunchTraceContext, count: usize) -> Result<Vec<i32>, anyhow::Error> {
    let supplier = supplier::ActiveModel {
        name: Set("Bulk".into()),
        ..Default::default()
    }
    .insert(&ctx.db)
    .await?;

    let names = (0..count).map(|n| format!("Part {n}")).collect::<Vec<_>>();
    for chunk in names.chunks(PART_CHUNK) {
        part::Entity::insert_many(chunk.iter().map(|name| part::ActiveModel {
            name: Set(name.clone()),
            status: Set(PartStatus::Ok),
            supplier_id: Set(supplier.id),
            ..Default::default()
        }))
        .exec_without_returning(&ctx.db)
        .await?;
    }

    Ok(part::Entity::find()
        .select_only()
        .column(part::Column::Id)
        .filter(part::Column::SupplierId.eq(supplier.id))
        .into_tuple::<i32>()
        .all(&ctx.db)
        .await?)
}

#[test_context(LaunchTraceContext)]
#[test(tokio::test)]
async fn create_build_with_many_parts(ctx: &LaunchTraceContext) -> Result<(), anyhow::Error> {
    let part_ids = bulk_parts(ctx, 2_000).await?;
    assert_eq!(part_ids.len(), 2_000);

    let service = BuildService::new();
    let created = service
        .create_build(request("B200", part_ids), &ctx.db)
        .await?;

    let build = service
        .fetch_build(created.build_id, &ctx.db)
        .await?
        .expect("must exist");
    assert_eq!(build.summary.part_count, 2_000);
    assert_eq!(build.parts.len(), 2_000);

    Ok(())
}

#[test_context(LaunchTraceContext)]
#[test(tokio::test)]
async fn create_build_with_many_unknown_parts(
    ctx: &LaunchTraceContext,
) -> Result<(), anyhow::Error> {
    ctx.seed_document("seed/acme.json").await?;

    let result = BuildService::new()
        .create_build(request("B201", (1..=40_000).collect::<Vec<_>>()), &ctx.db)
        .await;

    match result {
        Err(Error::BadRequest(msg, Some(ids))) => {
            assert_eq!(msg, "Unknown part IDs");
            assert!(ids.starts_with("6, 7, 8, "), "{ids}");
            assert!(ids.ends_with(", 40000"), "{ids}");
        }
        other => panic!("unexpected result: {other:?}"),
    }

    assert_eq!(build::Entity::find().count(&ctx.db).await?, 3);
    assert_eq!(build_part::Entity::find().count(&ctx.db).await?, 4);

    Ok(())
}
