//! 指标定义表：线名、类型与可选桶布局。
//!
//! # 维护守则（What）
//! - 线名在单服务组合区间内必须唯一，违例会在注册表构造时被校验拒绝；
//! - 新增条目追加在所属区段末尾；直方图经 `MetricDef::histogram` 声明桶上界；
//! - Frontend 服务没有私有指标区段，公共区段已覆盖其全部发射点。

use crate::defs::{MetricDef, metric_block};

metric_block! {
    /// 公共区段：服务层请求/错误/延迟、持久层、客户端与归档等跨服务指标。
    pub enum CommonMetric, table COMMON_METRIC_DEFS, count NUM_COMMON_METRICS;
    ServiceRequests => MetricDef::counter("service_requests"),
    ServiceFailures => MetricDef::counter("service_errors"),
    ServiceCriticalFailures => MetricDef::counter("service_errors_critical"),
    ServiceLatency => MetricDef::timer("service_latency"),
    ServiceErrInvalidArgumentCounter => MetricDef::counter("service_errors_invalid_argument"),
    ServiceErrDomainNotActiveCounter => MetricDef::counter("service_errors_domain_not_active"),
    ServiceErrResourceExhaustedCounter => MetricDef::counter("service_errors_resource_exhausted"),
    ServiceErrNotFoundCounter => MetricDef::counter("service_errors_entity_not_found"),
    ServiceErrExecutionAlreadyStartedCounter => MetricDef::counter("service_errors_execution_already_started"),
    ServiceErrDomainAlreadyExistsCounter => MetricDef::counter("service_errors_domain_already_exists"),
    ServiceErrCancellationAlreadyRequestedCounter => MetricDef::counter("service_errors_cancellation_already_requested"),
    ServiceErrQueryFailedCounter => MetricDef::counter("service_errors_query_failed"),
    ServiceErrContextTimeoutCounter => MetricDef::counter("service_errors_context_timeout"),
    ServiceErrRetryTaskCounter => MetricDef::counter("service_errors_retry_task"),
    ServiceErrBadBinaryCounter => MetricDef::counter("service_errors_bad_binary"),
    ServiceErrClientVersionNotSupportedCounter => MetricDef::counter("service_errors_client_version_not_supported"),
    ServiceErrIncompleteHistoryCounter => MetricDef::counter("service_errors_incomplete_history"),
    ServiceErrNonDeterministicCounter => MetricDef::counter("service_errors_nondeterministic"),
    PersistenceRequests => MetricDef::counter("persistence_requests"),
    PersistenceFailures => MetricDef::counter("persistence_errors"),
    PersistenceLatency => MetricDef::timer("persistence_latency"),
    PersistenceErrShardExistsCounter => MetricDef::counter("persistence_errors_shard_exists"),
    PersistenceErrShardOwnershipLostCounter => MetricDef::counter("persistence_errors_shard_ownership_lost"),
    PersistenceErrConditionFailedCounter => MetricDef::counter("persistence_errors_condition_failed"),
    PersistenceErrCurrentWorkflowConditionFailedCounter => MetricDef::counter("persistence_errors_current_workflow_condition_failed"),
    PersistenceErrTimeoutCounter => MetricDef::counter("persistence_errors_timeout"),
    PersistenceErrBusyCounter => MetricDef::counter("persistence_errors_busy"),
    PersistenceErrEntityNotExistsCounter => MetricDef::counter("persistence_errors_entity_not_exists"),
    PersistenceErrExecutionAlreadyStartedCounter => MetricDef::counter("persistence_errors_execution_already_started"),
    PersistenceErrDomainAlreadyExistsCounter => MetricDef::counter("persistence_errors_domain_already_exists"),
    PersistenceErrBadRequestCounter => MetricDef::counter("persistence_errors_bad_request"),
    PersistenceSampledCounter => MetricDef::counter("persistence_sampled"),
    ClientRequests => MetricDef::counter("client_requests"),
    ClientFailures => MetricDef::counter("client_errors"),
    ClientLatency => MetricDef::timer("client_latency"),
    ClientRedirectionRequests => MetricDef::counter("client_redirection_requests"),
    ClientRedirectionFailures => MetricDef::counter("client_redirection_errors"),
    ClientRedirectionLatency => MetricDef::timer("client_redirection_latency"),
    DomainCachePrepareCallbacksLatency => MetricDef::timer("domain_cache_prepare_callbacks_latency"),
    DomainCacheCallbacksLatency => MetricDef::timer("domain_cache_callbacks_latency"),
    HistorySize => MetricDef::timer("history_size"),
    HistoryCount => MetricDef::timer("history_count"),
    EventBlobSize => MetricDef::timer("event_blob_size"),
    ArchivalConfigFailures => MetricDef::counter("archivalconfig_failures"),
    ElasticsearchRequests => MetricDef::counter("elasticsearch_requests"),
    ElasticsearchFailures => MetricDef::counter("elasticsearch_errors"),
    ElasticsearchLatency => MetricDef::timer("elasticsearch_latency"),
    ElasticsearchErrBadRequestCounter => MetricDef::counter("elasticsearch_errors_bad_request"),
    ElasticsearchErrBusyCounter => MetricDef::counter("elasticsearch_errors_busy"),
    SequentialTaskSubmitRequest => MetricDef::counter("sequentialtask_submit_request"),
    SequentialTaskSubmitRequestTaskQueueExist => MetricDef::counter("sequentialtask_submit_request_taskqueue_exist"),
    SequentialTaskSubmitRequestTaskQueueMissing => MetricDef::counter("sequentialtask_submit_request_taskqueue_missing"),
    SequentialTaskSubmitLatency => MetricDef::timer("sequentialtask_submit_latency"),
    SequentialTaskQueueSize => MetricDef::timer("sequentialtask_queue_size"),
    SequentialTaskQueueProcessingLatency => MetricDef::timer("sequentialtask_queue_processing_latency"),
    SequentialTaskTaskProcessingLatency => MetricDef::timer("sequentialtask_task_processing_latency"),
    ParallelTaskSubmitRequest => MetricDef::counter("paralleltask_submit_request"),
    ParallelTaskSubmitLatency => MetricDef::timer("paralleltask_submit_latency"),
    ParallelTaskTaskProcessingLatency => MetricDef::timer("paralleltask_task_processing_latency"),
    PriorityTaskSubmitRequest => MetricDef::counter("prioritytask_submit_request"),
    PriorityTaskSubmitLatency => MetricDef::timer("prioritytask_submit_latency"),
    HistoryArchiverArchiveNonRetryableErrorCount => MetricDef::counter("history_archiver_archive_non_retryable_error"),
    HistoryArchiverArchiveTransientErrorCount => MetricDef::counter("history_archiver_archive_transient_error"),
    HistoryArchiverArchiveSuccessCount => MetricDef::counter("history_archiver_archive_success"),
    HistoryArchiverHistoryMutatedCount => MetricDef::counter("history_archiver_history_mutated"),
    HistoryArchiverTotalUploadSize => MetricDef::timer("history_archiver_total_upload_size"),
    HistoryArchiverHistorySize => MetricDef::timer("history_archiver_history_size"),
    HistoryArchiverBlobExistsCount => MetricDef::counter("history_archiver_blob_exists"),
    HistoryArchiverBlobSize => MetricDef::timer("history_archiver_blob_size"),
    HistoryArchiverRunningDeterministicConstructionCheckCount => MetricDef::counter("history_archiver_running_deterministic_construction_check"),
    HistoryArchiverDeterministicConstructionCheckFailedCount => MetricDef::counter("history_archiver_deterministic_construction_check_failed"),
    HistoryArchiverRunningBlobIntegrityCheckCount => MetricDef::counter("history_archiver_running_blob_integrity_check"),
    HistoryArchiverBlobIntegrityCheckFailedCount => MetricDef::counter("history_archiver_blob_integrity_check_failed"),
    HistoryArchiverDuplicateArchivalsCount => MetricDef::counter("history_archiver_duplicate_archivals"),
    VisibilityArchiverArchiveNonRetryableErrorCount => MetricDef::counter("visibility_archiver_archive_non_retryable_error"),
    VisibilityArchiverArchiveTransientErrorCount => MetricDef::counter("visibility_archiver_archive_transient_error"),
    VisibilityArchiveSuccessCount => MetricDef::counter("visibility_archiver_archive_success"),
    MatchingClientForwardedCounter => MetricDef::counter("matching_client_forwarded"),
    MatchingClientInvalidTaskListName => MetricDef::counter("invalid_task_list_name"),
    DomainReplicationTaskAckLevelGauge => MetricDef::gauge("domain_replication_task_ack_level"),
    DomainReplicationDLQAckLevelGauge => MetricDef::gauge("domain_dlq_ack_level"),
    DomainReplicationDLQMaxLevelGauge => MetricDef::gauge("domain_dlq_max_level"),
}

metric_block! {
    /// History 服务私有区段。
    pub enum HistoryMetric, table HISTORY_METRIC_DEFS, count NUM_HISTORY_METRICS;
    TaskRequests => MetricDef::counter("task_requests"),
    TaskLatency => MetricDef::timer("task_latency"),
    TaskFailures => MetricDef::counter("task_errors"),
    TaskDiscarded => MetricDef::counter("task_errors_discarded"),
    TaskAttemptTimer => MetricDef::timer("task_attempt"),
    TaskStandbyRetryCounter => MetricDef::counter("task_errors_standby_retry_counter"),
    TaskNotActiveCounter => MetricDef::counter("task_errors_not_active_counter"),
    TaskLimitExceededCounter => MetricDef::counter("task_errors_limit_exceeded_counter"),
    TaskBatchCompleteCounter => MetricDef::counter("task_batch_complete_counter"),
    TaskProcessingLatency => MetricDef::timer("task_latency_processing"),
    TaskQueueLatency => MetricDef::timer("task_latency_queue"),
    TransferTaskThrottledCounter => MetricDef::counter("transfer_task_throttled_counter"),
    TimerTaskThrottledCounter => MetricDef::counter("timer_task_throttled_counter"),
    ActivityE2ELatency => MetricDef::timer("activity_end_to_end_latency"),
    AckLevelUpdateCounter => MetricDef::counter("ack_level_update"),
    AckLevelUpdateFailedCounter => MetricDef::counter("ack_level_update_failed"),
    DecisionTypeScheduleActivityCounter => MetricDef::counter("schedule_activity_decision"),
    DecisionTypeCompleteWorkflowCounter => MetricDef::counter("complete_workflow_decision"),
    DecisionTypeFailWorkflowCounter => MetricDef::counter("fail_workflow_decision"),
    DecisionTypeCancelWorkflowCounter => MetricDef::counter("cancel_workflow_decision"),
    DecisionTypeStartTimerCounter => MetricDef::counter("start_timer_decision"),
    DecisionTypeCancelActivityCounter => MetricDef::counter("cancel_activity_decision"),
    DecisionTypeCancelTimerCounter => MetricDef::counter("cancel_timer_decision"),
    DecisionTypeRecordMarkerCounter => MetricDef::counter("record_marker_decision"),
    DecisionTypeCancelExternalWorkflowCounter => MetricDef::counter("cancel_external_workflow_decision"),
    DecisionTypeChildWorkflowCounter => MetricDef::counter("child_workflow_decision"),
    DecisionTypeContinueAsNewCounter => MetricDef::counter("continue_as_new_decision"),
    DecisionTypeSignalExternalWorkflowCounter => MetricDef::counter("signal_external_workflow_decision"),
    DecisionTypeUpsertWorkflowSearchAttributesCounter => MetricDef::counter("upsert_workflow_search_attributes_decision"),
    EmptyCompletionDecisionsCounter => MetricDef::counter("empty_completion_decisions"),
    MultipleCompletionDecisionsCounter => MetricDef::counter("multiple_completion_decisions"),
    FailedDecisionsCounter => MetricDef::counter("failed_decisions"),
    StaleMutableStateCounter => MetricDef::counter("stale_mutable_state"),
    AutoResetPointsLimitExceededCounter => MetricDef::counter("auto_reset_points_exceed_limit"),
    AutoResetPointCorruptionCounter => MetricDef::counter("auto_reset_point_corruption"),
    ConcurrencyUpdateFailureCounter => MetricDef::counter("concurrency_update_failure"),
    ServiceErrEventAlreadyStartedCounter => MetricDef::counter("service_errors_event_already_started"),
    ServiceErrShardOwnershipLostCounter => MetricDef::counter("service_errors_shard_ownership_lost"),
    HeartbeatTimeoutCounter => MetricDef::counter("heartbeat_timeout"),
    ScheduleToStartTimeoutCounter => MetricDef::counter("schedule_to_start_timeout"),
    StartToCloseTimeoutCounter => MetricDef::counter("start_to_close_timeout"),
    ScheduleToCloseTimeoutCounter => MetricDef::counter("schedule_to_close_timeout"),
    NewTimerCounter => MetricDef::counter("new_timer"),
    NewTimerNotifyCounter => MetricDef::counter("new_timer_notifications"),
    AcquireShardsCounter => MetricDef::counter("acquire_shards_count"),
    AcquireShardsLatency => MetricDef::timer("acquire_shards_latency"),
    ShardClosedCounter => MetricDef::counter("shard_closed_count"),
    ShardItemCreatedCounter => MetricDef::counter("sharditem_created_count"),
    ShardItemRemovedCounter => MetricDef::counter("sharditem_removed_count"),
    ShardItemAcquisitionLatency => MetricDef::timer("sharditem_acquisition_latency"),
    ShardInfoReplicationPendingTasksTimer => MetricDef::timer("shardinfo_replication_pending_task"),
    ShardInfoTransferActivePendingTasksTimer => MetricDef::timer("shardinfo_transfer_active_pending_task"),
    ShardInfoTransferStandbyPendingTasksTimer => MetricDef::timer("shardinfo_transfer_standby_pending_task"),
    ShardInfoTimerActivePendingTasksTimer => MetricDef::timer("shardinfo_timer_active_pending_task"),
    ShardInfoTimerStandbyPendingTasksTimer => MetricDef::timer("shardinfo_timer_standby_pending_task"),
    ShardInfoReplicationLagTimer => MetricDef::timer("shardinfo_replication_lag"),
    ShardInfoTransferLagTimer => MetricDef::timer("shardinfo_transfer_lag"),
    ShardInfoTimerLagTimer => MetricDef::timer("shardinfo_timer_lag"),
    ShardInfoTransferDiffTimer => MetricDef::timer("shardinfo_transfer_diff"),
    ShardInfoTimerDiffTimer => MetricDef::timer("shardinfo_timer_diff"),
    ShardInfoTransferFailoverInProgressTimer => MetricDef::timer("shardinfo_transfer_failover_in_progress"),
    ShardInfoTimerFailoverInProgressTimer => MetricDef::timer("shardinfo_timer_failover_in_progress"),
    ShardInfoTransferFailoverLatencyTimer => MetricDef::timer("shardinfo_transfer_failover_latency"),
    ShardInfoTimerFailoverLatencyTimer => MetricDef::timer("shardinfo_timer_failover_latency"),
    SyncShardFromRemoteCounter => MetricDef::counter("syncshard_remote_count"),
    SyncShardFromRemoteFailure => MetricDef::counter("syncshard_remote_failed"),
    MembershipChangedCounter => MetricDef::counter("membership_changed_count"),
    NumShardsGauge => MetricDef::gauge("numshards_gauge"),
    GetEngineForShardErrorCounter => MetricDef::counter("get_engine_for_shard_errors"),
    GetEngineForShardLatency => MetricDef::timer("get_engine_for_shard_latency"),
    RemoveEngineForShardLatency => MetricDef::timer("remove_engine_for_shard_latency"),
    CompleteDecisionWithStickyEnabledCounter => MetricDef::counter("complete_decision_sticky_enabled_count"),
    CompleteDecisionWithStickyDisabledCounter => MetricDef::counter("complete_decision_sticky_disabled_count"),
    DecisionHeartbeatTimeoutCounter => MetricDef::counter("decision_heartbeat_timeout_count"),
    HistoryEventNotificationQueueingLatency => MetricDef::timer("history_event_notification_queueing_latency"),
    HistoryEventNotificationFanoutLatency => MetricDef::timer("history_event_notification_fanout_latency"),
    HistoryEventNotificationInFlightMessageGauge => MetricDef::gauge("history_event_notification_inflight_message_gauge"),
    HistoryEventNotificationFailDeliveryCount => MetricDef::counter("history_event_notification_fail_delivery_count"),
    EmptyReplicationEventsCounter => MetricDef::counter("empty_replication_events"),
    DuplicateReplicationEventsCounter => MetricDef::counter("duplicate_replication_events"),
    StaleReplicationEventsCounter => MetricDef::counter("stale_replication_events"),
    ReplicationEventsSizeTimer => MetricDef::timer("replication_events_size"),
    BufferReplicationTaskTimer => MetricDef::timer("buffer_replication_tasks"),
    UnbufferReplicationTaskTimer => MetricDef::timer("unbuffer_replication_tasks"),
    HistoryConflictsCounter => MetricDef::counter("history_conflicts"),
    CompleteTaskFailedCounter => MetricDef::counter("complete_task_fail_count"),
    CacheRequests => MetricDef::counter("cache_requests"),
    CacheFailures => MetricDef::counter("cache_errors"),
    CacheLatency => MetricDef::timer("cache_latency"),
    CacheMissCounter => MetricDef::counter("cache_miss"),
    AcquireLockFailedCounter => MetricDef::counter("acquire_lock_failed"),
    WorkflowContextCleared => MetricDef::counter("workflow_context_cleared"),
    MutableStateSize => MetricDef::timer("mutable_state_size"),
    ExecutionInfoSize => MetricDef::timer("execution_info_size"),
    ActivityInfoSize => MetricDef::timer("activity_info_size"),
    TimerInfoSize => MetricDef::timer("timer_info_size"),
    ChildInfoSize => MetricDef::timer("child_info_size"),
    SignalInfoSize => MetricDef::timer("signal_info"),
    BufferedEventsSize => MetricDef::timer("buffered_events_size"),
    ActivityInfoCount => MetricDef::timer("activity_info_count"),
    TimerInfoCount => MetricDef::timer("timer_info_count"),
    ChildInfoCount => MetricDef::timer("child_info_count"),
    SignalInfoCount => MetricDef::timer("signal_info_count"),
    RequestCancelInfoCount => MetricDef::timer("request_cancel_info_count"),
    BufferedEventsCount => MetricDef::timer("buffered_events_count"),
    DeleteActivityInfoCount => MetricDef::timer("delete_activity_info"),
    DeleteTimerInfoCount => MetricDef::timer("delete_timer_info"),
    DeleteChildInfoCount => MetricDef::timer("delete_child_info"),
    DeleteSignalInfoCount => MetricDef::timer("delete_signal_info"),
    DeleteRequestCancelInfoCount => MetricDef::timer("delete_request_cancel_info"),
    WorkflowRetryBackoffTimerCount => MetricDef::counter("workflow_retry_backoff_timer"),
    WorkflowCronBackoffTimerCount => MetricDef::counter("workflow_cron_backoff_timer"),
    WorkflowCleanupDeleteCount => MetricDef::counter("workflow_cleanup_delete"),
    WorkflowCleanupArchiveCount => MetricDef::counter("workflow_cleanup_archive"),
    WorkflowCleanupNopCount => MetricDef::counter("workflow_cleanup_nop"),
    WorkflowCleanupDeleteHistoryInlineCount => MetricDef::counter("workflow_cleanup_delete_history_inline"),
    WorkflowSuccessCount => MetricDef::counter("workflow_success"),
    WorkflowCancelCount => MetricDef::counter("workflow_cancel"),
    WorkflowFailedCount => MetricDef::counter("workflow_failed"),
    WorkflowTimeoutCount => MetricDef::counter("workflow_timeout"),
    WorkflowTerminateCount => MetricDef::counter("workflow_terminate"),
    ArchiverClientSendSignalCount => MetricDef::counter("archiver_client_sent_signal"),
    ArchiverClientSendSignalFailureCount => MetricDef::counter("archiver_client_send_signal_error"),
    ArchiverClientHistoryRequestCount => MetricDef::counter("archiver_client_history_request"),
    ArchiverClientHistoryInlineArchiveAttemptCount => MetricDef::counter("archiver_client_history_inline_archive_attempt"),
    ArchiverClientHistoryInlineArchiveFailureCount => MetricDef::counter("archiver_client_history_inline_archive_failure"),
    ArchiverClientVisibilityRequestCount => MetricDef::counter("archiver_client_visibility_request"),
    ArchiverClientVisibilityInlineArchiveAttemptCount => MetricDef::counter("archiver_client_visibility_inline_archive_attempt"),
    ArchiverClientVisibilityInlineArchiveFailureCount => MetricDef::counter("archiver_client_visibility_inline_archive_failure"),
    LastRetrievedMessageID => MetricDef::gauge("last_retrieved_message_id"),
    LastProcessedMessageID => MetricDef::gauge("last_processed_message_id"),
    ReplicationTasksApplied => MetricDef::counter("replication_tasks_applied"),
    ReplicationTasksFailed => MetricDef::counter("replication_tasks_failed"),
    ReplicationTasksLag => MetricDef::timer("replication_tasks_lag"),
    ReplicationTasksFetched => MetricDef::timer("replication_tasks_fetched"),
    ReplicationTasksReturned => MetricDef::timer("replication_tasks_returned"),
    ReplicationDLQFailed => MetricDef::counter("replication_dlq_enqueue_failed"),
    ReplicationDLQMaxLevelGauge => MetricDef::gauge("replication_dlq_max_level"),
    ReplicationDLQAckLevelGauge => MetricDef::gauge("replication_dlq_ack_level"),
    GetReplicationMessagesForShardLatency => MetricDef::timer("get_replication_messages_for_shard"),
    GetDLQReplicationMessagesLatency => MetricDef::timer("get_dlq_replication_messages"),
    EventReapplySkippedCount => MetricDef::counter("event_reapply_skipped_count"),
    DirectQueryDispatchLatency => MetricDef::timer("direct_query_dispatch_latency"),
    DirectQueryDispatchStickyLatency => MetricDef::timer("direct_query_dispatch_sticky_latency"),
    DirectQueryDispatchNonStickyLatency => MetricDef::timer("direct_query_dispatch_non_sticky_latency"),
    DirectQueryDispatchStickySuccessCount => MetricDef::counter("direct_query_dispatch_sticky_success"),
    DirectQueryDispatchNonStickySuccessCount => MetricDef::counter("direct_query_dispatch_non_sticky_success"),
    DirectQueryDispatchClearStickinessLatency => MetricDef::timer("direct_query_dispatch_clear_stickiness_latency"),
    DirectQueryDispatchClearStickinessSuccessCount => MetricDef::counter("direct_query_dispatch_clear_stickiness_success"),
    DirectQueryDispatchTimeoutBeforeNonStickyCount => MetricDef::counter("direct_query_dispatch_timeout_before_non_sticky"),
    DecisionTaskQueryLatency => MetricDef::timer("decision_task_query_latency"),
    ConsistentQueryTimeoutCount => MetricDef::counter("consistent_query_timeout"),
    QueryBeforeFirstDecisionCount => MetricDef::counter("query_before_first_decision"),
    QueryBufferExceededCount => MetricDef::counter("query_buffer_exceeded"),
    QueryRegistryInvalidStateCount => MetricDef::counter("query_registry_invalid_state"),
    WorkerNotSupportsConsistentQueryCount => MetricDef::counter("worker_not_supports_consistent_query"),
    DecisionStartToCloseTimeoutOverrideCount => MetricDef::counter("decision_start_to_close_timeout_overrides"),
    ReplicationTaskCleanupCount => MetricDef::counter("replication_task_cleanup_count"),
    ReplicationTaskCleanupFailure => MetricDef::counter("replication_task_cleanup_failed"),
    MutableStateChecksumMismatch => MetricDef::counter("mutable_state_checksum_mismatch"),
    MutableStateChecksumInvalidated => MetricDef::counter("mutable_state_checksum_invalidated"),
}

metric_block! {
    /// Matching 服务私有区段。
    pub enum MatchingMetric, table MATCHING_METRIC_DEFS, count NUM_MATCHING_METRICS;
    PollSuccessCounter => MetricDef::counter("poll_success"),
    PollTimeoutCounter => MetricDef::counter("poll_timeouts"),
    PollSuccessWithSyncCounter => MetricDef::counter("poll_success_sync"),
    LeaseRequestCounter => MetricDef::counter("lease_requests"),
    LeaseFailureCounter => MetricDef::counter("lease_failures"),
    ConditionFailedErrorCounter => MetricDef::counter("condition_failed_errors"),
    RespondQueryTaskFailedCounter => MetricDef::counter("respond_query_failed"),
    SyncThrottleCounter => MetricDef::counter("sync_throttle_count"),
    BufferThrottleCounter => MetricDef::counter("buffer_throttle_count"),
    SyncMatchLatency => MetricDef::timer("syncmatch_latency"),
    AsyncMatchLatency => MetricDef::timer("asyncmatch_latency"),
    ExpiredTasksCounter => MetricDef::counter("tasks_expired"),
    ForwardedCounter => MetricDef::counter("forwarded"),
    ForwardTaskCalls => MetricDef::counter("forward_task_calls"),
    ForwardTaskErrors => MetricDef::counter("forward_task_errors"),
    ForwardTaskLatency => MetricDef::counter("forward_task_latency"),
    ForwardQueryCalls => MetricDef::counter("forward_query_calls"),
    ForwardQueryErrors => MetricDef::counter("forward_query_errors"),
    ForwardQueryLatency => MetricDef::counter("forward_query_latency"),
    ForwardPollCalls => MetricDef::counter("forward_poll_calls"),
    ForwardPollErrors => MetricDef::counter("forward_poll_errors"),
    ForwardPollLatency => MetricDef::counter("forward_poll_latency"),
    LocalToLocalMatchCounter => MetricDef::counter("local_to_local_matches"),
    LocalToRemoteMatchCounter => MetricDef::counter("local_to_remote_matches"),
    RemoteToLocalMatchCounter => MetricDef::counter("remote_to_local_matches"),
    RemoteToRemoteMatchCounter => MetricDef::counter("remote_to_remote_matches"),
}

metric_block! {
    /// Worker 服务私有区段。
    pub enum WorkerMetric, table WORKER_METRIC_DEFS, count NUM_WORKER_METRICS;
    ReplicatorMessages => MetricDef::counter("replicator_messages"),
    ReplicatorFailures => MetricDef::counter("replicator_errors"),
    ReplicatorMessagesDropped => MetricDef::counter("replicator_messages_dropped"),
    ReplicatorLatency => MetricDef::counter("replicator_latency"),
    ReplicatorDLQFailures => MetricDef::counter("replicator_dlq_enqueue_fails"),
    ESProcessorRequests => MetricDef::counter("es_processor_requests"),
    ESProcessorRetries => MetricDef::counter("es_processor_retries"),
    ESProcessorFailures => MetricDef::counter("es_processor_errors"),
    ESProcessorCorruptedData => MetricDef::counter("es_processor_corrupted_data"),
    ESProcessorProcessMsgLatency => MetricDef::timer("es_processor_process_msg_latency"),
    IndexProcessorCorruptedData => MetricDef::counter("index_processor_corrupted_data"),
    IndexProcessorProcessMsgLatency => MetricDef::timer("index_processor_process_msg_latency"),
    ArchiverNonRetryableErrorCount => MetricDef::counter("archiver_non_retryable_error"),
    ArchiverStartedCount => MetricDef::counter("archiver_started"),
    ArchiverStoppedCount => MetricDef::counter("archiver_stopped"),
    ArchiverCoroutineStartedCount => MetricDef::counter("archiver_coroutine_started"),
    ArchiverCoroutineStoppedCount => MetricDef::counter("archiver_coroutine_stopped"),
    ArchiverHandleHistoryRequestLatency => MetricDef::counter("archiver_handle_history_request_latency"),
    ArchiverHandleVisibilityRequestLatency => MetricDef::counter("archiver_handle_visibility_request_latency"),
    ArchiverUploadWithRetriesLatency => MetricDef::counter("archiver_upload_with_retries_latency"),
    ArchiverDeleteWithRetriesLatency => MetricDef::counter("archiver_delete_with_retries_latency"),
    ArchiverUploadFailedAllRetriesCount => MetricDef::counter("archiver_upload_failed_all_retries"),
    ArchiverUploadSuccessCount => MetricDef::counter("archiver_upload_success"),
    ArchiverDeleteFailedAllRetriesCount => MetricDef::counter("archiver_delete_failed_all_retries"),
    ArchiverDeleteSuccessCount => MetricDef::counter("archiver_delete_success"),
    ArchiverHandleVisibilityFailedAllRetiresCount => MetricDef::counter("archiver_handle_visibility_failed_all_retries"),
    ArchiverHandleVisibilitySuccessCount => MetricDef::counter("archiver_handle_visibility_success"),
    ArchiverBacklogSizeGauge => MetricDef::counter("archiver_backlog_size"),
    ArchiverPumpTimeoutCount => MetricDef::counter("archiver_pump_timeout"),
    ArchiverPumpSignalThresholdCount => MetricDef::counter("archiver_pump_signal_threshold"),
    ArchiverPumpTimeoutWithoutSignalsCount => MetricDef::counter("archiver_pump_timeout_without_signals"),
    ArchiverPumpSignalChannelClosedCount => MetricDef::counter("archiver_pump_signal_channel_closed"),
    ArchiverWorkflowStartedCount => MetricDef::counter("archiver_workflow_started"),
    ArchiverNumPumpedRequestsCount => MetricDef::counter("archiver_num_pumped_requests"),
    ArchiverNumHandledRequestsCount => MetricDef::counter("archiver_num_handled_requests"),
    ArchiverPumpedNotEqualHandledCount => MetricDef::counter("archiver_pumped_not_equal_handled"),
    ArchiverHandleAllRequestsLatency => MetricDef::counter("archiver_handle_all_requests_latency"),
    ArchiverWorkflowStoppingCount => MetricDef::counter("archiver_workflow_stopping"),
    TaskProcessedCount => MetricDef::gauge("task_processed"),
    TaskDeletedCount => MetricDef::gauge("task_deleted"),
    TaskListProcessedCount => MetricDef::gauge("tasklist_processed"),
    TaskListDeletedCount => MetricDef::gauge("tasklist_deleted"),
    TaskListOutstandingCount => MetricDef::gauge("tasklist_outstanding"),
    ExecutionsOutstandingCount => MetricDef::gauge("executions_outstanding"),
    StartedCount => MetricDef::counter("started"),
    StoppedCount => MetricDef::counter("stopped"),
    ExecutorTasksDeferredCount => MetricDef::counter("executor_deferred"),
    ExecutorTasksDroppedCount => MetricDef::counter("executor_dropped"),
    BatcherProcessorSuccess => MetricDef::counter("batcher_processor_requests"),
    BatcherProcessorFailures => MetricDef::counter("batcher_processor_errors"),
    HistoryScavengerSuccessCount => MetricDef::counter("scavenger_success"),
    HistoryScavengerErrorCount => MetricDef::counter("scavenger_errors"),
    HistoryScavengerSkipCount => MetricDef::counter("scavenger_skips"),
    ParentClosePolicyProcessorSuccess => MetricDef::counter("parent_close_policy_processor_requests"),
    ParentClosePolicyProcessorFailures => MetricDef::counter("parent_close_policy_processor_errors"),
    DomainReplicationEnqueueDLQCount => MetricDef::counter("domain_replication_dlq_enqueue_requests"),
}
