//! 操作范围定义表：每个服务的逻辑工作单元及其标签属性。
//!
//! # 维护守则（What）
//! - 条目只增不改：`operation` 与标签一经发布即为后端口径的一部分；
//! - 新增条目追加在所属区段末尾，编号由声明顺序决定，禁止插入中段；
//! - 公共区段被所有服务原样共享，新增前先确认该操作确属跨服务语义。

use crate::defs::{ScopeDef, scope_block};
use crate::tags::{Tag, tag};

// 定义表中实际出现的静态标签组合；合并规则见解析器。

const ROLE_HISTORY: &[Tag<'static>] = &[Tag::from_static(tag::SERVICE_ROLE, tag::role::HISTORY)];
const ROLE_MATCHING: &[Tag<'static>] = &[Tag::from_static(tag::SERVICE_ROLE, tag::role::MATCHING)];
const ROLE_FRONTEND: &[Tag<'static>] = &[Tag::from_static(tag::SERVICE_ROLE, tag::role::FRONTEND)];
const ROLE_ADMIN: &[Tag<'static>] = &[Tag::from_static(tag::SERVICE_ROLE, tag::role::ADMIN)];
const ROLE_DC_REDIRECTION: &[Tag<'static>] = &[Tag::from_static(tag::SERVICE_ROLE, tag::role::DC_REDIRECTION)];
const ROLE_BLOBSTORE: &[Tag<'static>] = &[Tag::from_static(tag::SERVICE_ROLE, tag::role::BLOBSTORE)];
const CACHE_MUTABLE_STATE: &[Tag<'static>] = &[Tag::from_static(tag::CACHE_TYPE, tag::cache_type::MUTABLE_STATE)];
const CACHE_EVENTS: &[Tag<'static>] = &[Tag::from_static(tag::CACHE_TYPE, tag::cache_type::EVENTS)];
const STATS_SIZE: &[Tag<'static>] = &[Tag::from_static(tag::STATS_TYPE, tag::stats_type::SIZE)];
const STATS_COUNT: &[Tag<'static>] = &[Tag::from_static(tag::STATS_TYPE, tag::stats_type::COUNT)];

scope_block! {
    /// 公共区段：所有服务共享的操作范围（持久层调用、对等服务 RPC、DC 重定向等）。
    /// 同一编号在任何服务下含义一致。
    pub enum CommonScope, table COMMON_SCOPE_DEFS, count NUM_COMMON_SCOPES;
    PersistenceCreateShard => ScopeDef::op("CreateShard"),
    PersistenceGetShard => ScopeDef::op("GetShard"),
    PersistenceUpdateShard => ScopeDef::op("UpdateShard"),
    PersistenceCreateWorkflowExecution => ScopeDef::op("CreateWorkflowExecution"),
    PersistenceGetWorkflowExecution => ScopeDef::op("GetWorkflowExecution"),
    PersistenceUpdateWorkflowExecution => ScopeDef::op("UpdateWorkflowExecution"),
    PersistenceConflictResolveWorkflowExecution => ScopeDef::op("ConflictResolveWorkflowExecution"),
    PersistenceResetWorkflowExecution => ScopeDef::op("ResetWorkflowExecution"),
    PersistenceDeleteWorkflowExecution => ScopeDef::op("DeleteWorkflowExecution"),
    PersistenceDeleteCurrentWorkflowExecution => ScopeDef::op("DeleteCurrentWorkflowExecution"),
    PersistenceDeleteTask => ScopeDef::op("PersistenceDelete"),
    PersistenceGetCurrentExecution => ScopeDef::op("GetCurrentExecution"),
    PersistenceGetTransferTasks => ScopeDef::op("GetTransferTasks"),
    PersistenceCompleteTransferTask => ScopeDef::op("CompleteTransferTask"),
    PersistenceRangeCompleteTransferTask => ScopeDef::op("RangeCompleteTransferTask"),
    PersistenceGetReplicationTasks => ScopeDef::op("GetReplicationTasks"),
    PersistenceCompleteReplicationTask => ScopeDef::op("CompleteReplicationTask"),
    PersistenceRangeCompleteReplicationTask => ScopeDef::op("RangeCompleteReplicationTask"),
    PersistencePutReplicationTaskToDLQ => ScopeDef::op("PutReplicationTaskToDLQ"),
    PersistenceGetReplicationTasksFromDLQ => ScopeDef::op("GetReplicationTasksFromDLQ"),
    PersistenceDeleteReplicationTaskFromDLQ => ScopeDef::op("DeleteReplicationTaskFromDLQ"),
    PersistenceRangeDeleteReplicationTaskFromDLQ => ScopeDef::op("RangeDeleteReplicationTaskFromDLQ"),
    PersistenceGetTimerIndexTasks => ScopeDef::op("GetTimerIndexTasks"),
    PersistenceCompleteTimerTask => ScopeDef::op("CompleteTimerTask"),
    PersistenceRangeCompleteTimerTask => ScopeDef::op("RangeCompleteTimerTask"),
    PersistenceCreateTask => ScopeDef::op("CreateTask"),
    PersistenceGetTasks => ScopeDef::op("GetTasks"),
    PersistenceCompleteTask => ScopeDef::op("CompleteTask"),
    PersistenceCompleteTasksLessThan => ScopeDef::op("CompleteTasksLessThan"),
    PersistenceLeaseTaskList => ScopeDef::op("LeaseTaskList"),
    PersistenceUpdateTaskList => ScopeDef::op("UpdateTaskList"),
    PersistenceListTaskList => ScopeDef::op("ListTaskList"),
    PersistenceDeleteTaskList => ScopeDef::op("DeleteTaskList"),
    PersistenceAppendHistoryEvents => ScopeDef::op("AppendHistoryEvents"),
    PersistenceGetWorkflowExecutionHistory => ScopeDef::op("GetWorkflowExecutionHistory"),
    PersistenceDeleteWorkflowExecutionHistory => ScopeDef::op("DeleteWorkflowExecutionHistory"),
    PersistenceCreateDomain => ScopeDef::op("CreateDomain"),
    PersistenceGetDomain => ScopeDef::op("GetDomain"),
    PersistenceUpdateDomain => ScopeDef::op("UpdateDomain"),
    PersistenceDeleteDomain => ScopeDef::op("DeleteDomain"),
    PersistenceDeleteDomainByName => ScopeDef::op("DeleteDomainByName"),
    PersistenceListDomain => ScopeDef::op("ListDomain"),
    PersistenceGetMetadata => ScopeDef::op("GetMetadata"),
    PersistenceRecordWorkflowExecutionStarted => ScopeDef::op("RecordWorkflowExecutionStarted"),
    PersistenceRecordWorkflowExecutionClosed => ScopeDef::op("RecordWorkflowExecutionClosed"),
    PersistenceUpsertWorkflowExecution => ScopeDef::op("UpsertWorkflowExecution"),
    PersistenceListOpenWorkflowExecutions => ScopeDef::op("ListOpenWorkflowExecutions"),
    PersistenceListClosedWorkflowExecutions => ScopeDef::op("ListClosedWorkflowExecutions"),
    PersistenceListOpenWorkflowExecutionsByType => ScopeDef::op("ListOpenWorkflowExecutionsByType"),
    PersistenceListClosedWorkflowExecutionsByType => ScopeDef::op("ListClosedWorkflowExecutionsByType"),
    PersistenceListOpenWorkflowExecutionsByWorkflowID => ScopeDef::op("ListOpenWorkflowExecutionsByWorkflowID"),
    PersistenceListClosedWorkflowExecutionsByWorkflowID => ScopeDef::op("ListClosedWorkflowExecutionsByWorkflowID"),
    PersistenceListClosedWorkflowExecutionsByStatus => ScopeDef::op("ListClosedWorkflowExecutionsByStatus"),
    PersistenceGetClosedWorkflowExecution => ScopeDef::op("GetClosedWorkflowExecution"),
    PersistenceVisibilityDeleteWorkflowExecution => ScopeDef::op("VisibilityDeleteWorkflowExecution"),
    PersistenceListWorkflowExecutions => ScopeDef::op("ListWorkflowExecutions"),
    PersistenceScanWorkflowExecutions => ScopeDef::op("ScanWorkflowExecutions"),
    PersistenceCountWorkflowExecutions => ScopeDef::op("CountWorkflowExecutions"),
    PersistenceEnqueueMessage => ScopeDef::op("EnqueueMessage"),
    PersistenceEnqueueMessageToDLQ => ScopeDef::op("EnqueueMessageToDLQ"),
    PersistenceReadQueueMessages => ScopeDef::op("ReadQueueMessages"),
    PersistenceReadQueueMessagesFromDLQ => ScopeDef::op("ReadQueueMessagesFromDLQ"),
    PersistenceDeleteQueueMessages => ScopeDef::op("DeleteQueueMessages"),
    PersistenceDeleteQueueMessageFromDLQ => ScopeDef::op("DeleteQueueMessageFromDLQ"),
    PersistenceRangeDeleteMessagesFromDLQ => ScopeDef::op("RangeDeleteMessagesFromDLQ"),
    PersistenceUpdateAckLevel => ScopeDef::op("UpdateAckLevel"),
    PersistenceGetAckLevel => ScopeDef::op("GetAckLevel"),
    PersistenceUpdateDLQAckLevel => ScopeDef::op("UpdateDLQAckLevel"),
    PersistenceGetDLQAckLevel => ScopeDef::op("GetDLQAckLevel"),
    PersistenceInitImmutableClusterMetadata => ScopeDef::op("InitializeImmutableClusterMetadata"),
    PersistenceGetImmutableClusterMetadata => ScopeDef::op("GetImmutableClusterMetadata"),
    PersistenceUpsertClusterMembership => ScopeDef::op("UpsertClusterMembership"),
    PersistencePruneClusterMembership => ScopeDef::op("PruneClusterMembership"),
    PersistenceGetClusterMembers => ScopeDef::op("GetClusterMembership"),
    HistoryClientStartWorkflowExecution => ScopeDef::tagged("HistoryClientStartWorkflowExecution", ROLE_HISTORY),
    HistoryClientRecordActivityTaskHeartbeat => ScopeDef::tagged("HistoryClientRecordActivityTaskHeartbeat", ROLE_HISTORY),
    HistoryClientRespondDecisionTaskCompleted => ScopeDef::tagged("HistoryClientRespondDecisionTaskCompleted", ROLE_HISTORY),
    HistoryClientRespondDecisionTaskFailed => ScopeDef::tagged("HistoryClientRespondDecisionTaskFailed", ROLE_HISTORY),
    HistoryClientRespondActivityTaskCompleted => ScopeDef::tagged("HistoryClientRespondActivityTaskCompleted", ROLE_HISTORY),
    HistoryClientRespondActivityTaskFailed => ScopeDef::tagged("HistoryClientRespondActivityTaskFailed", ROLE_HISTORY),
    HistoryClientRespondActivityTaskCanceled => ScopeDef::tagged("HistoryClientRespondActivityTaskCanceled", ROLE_HISTORY),
    HistoryClientGetMutableState => ScopeDef::tagged("HistoryClientGetMutableState", ROLE_HISTORY),
    HistoryClientPollMutableState => ScopeDef::tagged("HistoryClientPollMutableState", ROLE_HISTORY),
    HistoryClientResetStickyTaskList => ScopeDef::tagged("HistoryClientResetStickyTaskListScope", ROLE_HISTORY),
    HistoryClientDescribeWorkflowExecution => ScopeDef::tagged("HistoryClientDescribeWorkflowExecution", ROLE_HISTORY),
    HistoryClientRecordDecisionTaskStarted => ScopeDef::tagged("HistoryClientRecordDecisionTaskStarted", ROLE_HISTORY),
    HistoryClientRecordActivityTaskStarted => ScopeDef::tagged("HistoryClientRecordActivityTaskStarted", ROLE_HISTORY),
    HistoryClientRequestCancelWorkflowExecution => ScopeDef::tagged("HistoryClientRequestCancelWorkflowExecution", ROLE_HISTORY),
    HistoryClientSignalWorkflowExecution => ScopeDef::tagged("HistoryClientSignalWorkflowExecution", ROLE_HISTORY),
    HistoryClientSignalWithStartWorkflowExecution => ScopeDef::tagged("HistoryClientSignalWithStartWorkflowExecution", ROLE_HISTORY),
    HistoryClientRemoveSignalMutableState => ScopeDef::tagged("HistoryClientRemoveSignalMutableStateScope", ROLE_HISTORY),
    HistoryClientTerminateWorkflowExecution => ScopeDef::tagged("HistoryClientTerminateWorkflowExecution", ROLE_HISTORY),
    HistoryClientResetWorkflowExecution => ScopeDef::tagged("HistoryClientResetWorkflowExecution", ROLE_HISTORY),
    HistoryClientScheduleDecisionTask => ScopeDef::tagged("HistoryClientScheduleDecisionTask", ROLE_HISTORY),
    HistoryClientRecordChildExecutionCompleted => ScopeDef::tagged("HistoryClientRecordChildExecutionCompleted", ROLE_HISTORY),
    HistoryClientReplicateEvents => ScopeDef::tagged("HistoryClientReplicateEvents", ROLE_HISTORY),
    HistoryClientReplicateRawEvents => ScopeDef::tagged("HistoryClientReplicateRawEvents", ROLE_HISTORY),
    HistoryClientReplicateEventsV2 => ScopeDef::tagged("HistoryClientReplicateEventsV2", ROLE_HISTORY),
    HistoryClientSyncShardStatus => ScopeDef::tagged("HistoryClientSyncShardStatusScope", ROLE_HISTORY),
    HistoryClientSyncActivity => ScopeDef::tagged("HistoryClientSyncActivityScope", ROLE_HISTORY),
    HistoryClientGetReplicationTasks => ScopeDef::tagged("HistoryClientGetReplicationTasksScope", ROLE_HISTORY),
    HistoryClientGetDLQReplicationTasks => ScopeDef::tagged("HistoryClientGetDLQReplicationTasksScope", ROLE_HISTORY),
    HistoryClientQueryWorkflow => ScopeDef::tagged("HistoryClientQueryWorkflowScope", ROLE_HISTORY),
    HistoryClientReapplyEvents => ScopeDef::tagged("HistoryClientReapplyEventsScope", ROLE_HISTORY),
    HistoryClientReadDLQMessages => ScopeDef::tagged("HistoryClientReadDLQMessagesScope", ROLE_HISTORY),
    HistoryClientPurgeDLQMessages => ScopeDef::tagged("HistoryClientPurgeDLQMessagesScope", ROLE_HISTORY),
    HistoryClientMergeDLQMessages => ScopeDef::tagged("HistoryClientMergeDLQMessagesScope", ROLE_HISTORY),
    HistoryClientRefreshWorkflowTasks => ScopeDef::tagged("HistoryClientRefreshWorkflowTasksScope", ROLE_HISTORY),
    MatchingClientPollForDecisionTask => ScopeDef::tagged("MatchingClientPollForDecisionTask", ROLE_MATCHING),
    MatchingClientPollForActivityTask => ScopeDef::tagged("MatchingClientPollForActivityTask", ROLE_MATCHING),
    MatchingClientAddActivityTask => ScopeDef::tagged("MatchingClientAddActivityTask", ROLE_MATCHING),
    MatchingClientAddDecisionTask => ScopeDef::tagged("MatchingClientAddDecisionTask", ROLE_MATCHING),
    MatchingClientQueryWorkflow => ScopeDef::tagged("MatchingClientQueryWorkflow", ROLE_MATCHING),
    MatchingClientRespondQueryTaskCompleted => ScopeDef::tagged("MatchingClientRespondQueryTaskCompleted", ROLE_MATCHING),
    MatchingClientCancelOutstandingPoll => ScopeDef::tagged("MatchingClientCancelOutstandingPoll", ROLE_MATCHING),
    MatchingClientDescribeTaskList => ScopeDef::tagged("MatchingClientDescribeTaskList", ROLE_MATCHING),
    MatchingClientListTaskListPartitions => ScopeDef::tagged("MatchingClientListTaskListPartitions", ROLE_MATCHING),
    FrontendClientDeprecateDomain => ScopeDef::tagged("FrontendClientDeprecateDomain", ROLE_FRONTEND),
    FrontendClientDescribeDomain => ScopeDef::tagged("FrontendClientDescribeDomain", ROLE_FRONTEND),
    FrontendClientDescribeTaskList => ScopeDef::tagged("FrontendClientDescribeTaskList", ROLE_FRONTEND),
    FrontendClientDescribeWorkflowExecution => ScopeDef::tagged("FrontendClientDescribeWorkflowExecution", ROLE_FRONTEND),
    FrontendClientGetWorkflowExecutionHistory => ScopeDef::tagged("FrontendClientGetWorkflowExecutionHistory", ROLE_FRONTEND),
    FrontendClientGetWorkflowExecutionRawHistory => ScopeDef::tagged("FrontendClientGetWorkflowExecutionRawHistory", ROLE_FRONTEND),
    FrontendClientPollForWorkflowExecutionRawHistory => ScopeDef::tagged("FrontendClientPollForWorkflowExecutionRawHistoryScope", ROLE_FRONTEND),
    FrontendClientListArchivedWorkflowExecutions => ScopeDef::tagged("FrontendClientListArchivedWorkflowExecutions", ROLE_FRONTEND),
    FrontendClientListClosedWorkflowExecutions => ScopeDef::tagged("FrontendClientListClosedWorkflowExecutions", ROLE_FRONTEND),
    FrontendClientListDomains => ScopeDef::tagged("FrontendClientListDomains", ROLE_FRONTEND),
    FrontendClientListOpenWorkflowExecutions => ScopeDef::tagged("FrontendClientListOpenWorkflowExecutions", ROLE_FRONTEND),
    FrontendClientPollForActivityTask => ScopeDef::tagged("FrontendClientPollForActivityTask", ROLE_FRONTEND),
    FrontendClientPollForDecisionTask => ScopeDef::tagged("FrontendClientPollForDecisionTask", ROLE_FRONTEND),
    FrontendClientQueryWorkflow => ScopeDef::tagged("FrontendClientQueryWorkflow", ROLE_FRONTEND),
    FrontendClientRecordActivityTaskHeartbeat => ScopeDef::tagged("FrontendClientRecordActivityTaskHeartbeat", ROLE_FRONTEND),
    FrontendClientRecordActivityTaskHeartbeatByID => ScopeDef::tagged("FrontendClientRecordActivityTaskHeartbeatByID", ROLE_FRONTEND),
    FrontendClientRegisterDomain => ScopeDef::tagged("FrontendClientRegisterDomain", ROLE_FRONTEND),
    FrontendClientRequestCancelWorkflowExecution => ScopeDef::tagged("FrontendClientRequestCancelWorkflowExecution", ROLE_FRONTEND),
    FrontendClientResetStickyTaskList => ScopeDef::tagged("FrontendClientResetStickyTaskList", ROLE_FRONTEND),
    FrontendClientResetWorkflowExecution => ScopeDef::tagged("FrontendClientResetWorkflowExecution", ROLE_FRONTEND),
    FrontendClientRespondActivityTaskCanceled => ScopeDef::tagged("FrontendClientRespondActivityTaskCanceled", ROLE_FRONTEND),
    FrontendClientRespondActivityTaskCanceledByID => ScopeDef::tagged("FrontendClientRespondActivityTaskCanceledByID", ROLE_FRONTEND),
    FrontendClientRespondActivityTaskCompleted => ScopeDef::tagged("FrontendClientRespondActivityTaskCompleted", ROLE_FRONTEND),
    FrontendClientRespondActivityTaskCompletedByID => ScopeDef::tagged("FrontendClientRespondActivityTaskCompletedByID", ROLE_FRONTEND),
    FrontendClientRespondActivityTaskFailed => ScopeDef::tagged("FrontendClientRespondActivityTaskFailed", ROLE_FRONTEND),
    FrontendClientRespondActivityTaskFailedByID => ScopeDef::tagged("FrontendClientRespondActivityTaskFailedByID", ROLE_FRONTEND),
    FrontendClientRespondDecisionTaskCompleted => ScopeDef::tagged("FrontendClientRespondDecisionTaskCompleted", ROLE_FRONTEND),
    FrontendClientRespondDecisionTaskFailed => ScopeDef::tagged("FrontendClientRespondDecisionTaskFailed", ROLE_FRONTEND),
    FrontendClientRespondQueryTaskCompleted => ScopeDef::tagged("FrontendClientRespondQueryTaskCompleted", ROLE_FRONTEND),
    FrontendClientSignalWithStartWorkflowExecution => ScopeDef::tagged("FrontendClientSignalWithStartWorkflowExecution", ROLE_FRONTEND),
    FrontendClientSignalWorkflowExecution => ScopeDef::tagged("FrontendClientSignalWorkflowExecution", ROLE_FRONTEND),
    FrontendClientStartWorkflowExecution => ScopeDef::tagged("FrontendClientStartWorkflowExecution", ROLE_FRONTEND),
    FrontendClientTerminateWorkflowExecution => ScopeDef::tagged("FrontendClientTerminateWorkflowExecution", ROLE_FRONTEND),
    FrontendClientUpdateDomain => ScopeDef::tagged("FrontendClientUpdateDomain", ROLE_FRONTEND),
    FrontendClientListWorkflowExecutions => ScopeDef::tagged("FrontendClientListWorkflowExecutions", ROLE_FRONTEND),
    FrontendClientScanWorkflowExecutions => ScopeDef::tagged("FrontendClientScanWorkflowExecutions", ROLE_FRONTEND),
    FrontendClientCountWorkflowExecutions => ScopeDef::tagged("FrontendClientCountWorkflowExecutions", ROLE_FRONTEND),
    FrontendClientGetSearchAttributes => ScopeDef::tagged("FrontendClientGetSearchAttributes", ROLE_FRONTEND),
    FrontendClientGetReplicationTasks => ScopeDef::tagged("FrontendClientGetReplicationTasksScope", ROLE_FRONTEND),
    FrontendClientGetDomainReplicationTasks => ScopeDef::tagged("FrontendClientGetDomainReplicationTasksScope", ROLE_FRONTEND),
    FrontendClientGetDLQReplicationTasks => ScopeDef::tagged("FrontendClientGetDLQReplicationTasksScope", ROLE_FRONTEND),
    FrontendClientReapplyEvents => ScopeDef::tagged("FrontendClientReapplyEventsScope", ROLE_FRONTEND),
    FrontendClientGetClusterInfo => ScopeDef::tagged("FrontendClientGetClusterInfoScope", ROLE_FRONTEND),
    FrontendClientListTaskListPartitions => ScopeDef::tagged("FrontendClientListTaskListPartitions", ROLE_FRONTEND),
    AdminClientAddSearchAttribute => ScopeDef::tagged("AdminClientAddSearchAttribute", ROLE_ADMIN),
    AdminClientCloseShard => ScopeDef::tagged("AdminClientCloseShard", ROLE_ADMIN),
    AdminClientDescribeHistoryHost => ScopeDef::tagged("AdminClientDescribeHistoryHost", ROLE_ADMIN),
    AdminClientDescribeWorkflowExecution => ScopeDef::tagged("AdminClientDescribeWorkflowExecution", ROLE_ADMIN),
    AdminClientGetWorkflowExecutionRawHistory => ScopeDef::tagged("AdminClientGetWorkflowExecutionRawHistory", ROLE_ADMIN),
    AdminClientGetWorkflowExecutionRawHistoryV2 => ScopeDef::tagged("AdminClientGetWorkflowExecutionRawHistoryV2", ROLE_ADMIN),
    AdminClientDescribeCluster => ScopeDef::tagged("AdminClientDescribeCluster", ROLE_ADMIN),
    AdminClientReadDLQMessages => ScopeDef::tagged("AdminClientReadDLQMessages", ROLE_ADMIN),
    AdminClientPurgeDLQMessages => ScopeDef::tagged("AdminClientPurgeDLQMessages", ROLE_ADMIN),
    AdminClientMergeDLQMessages => ScopeDef::tagged("AdminClientMergeDLQMessages", ROLE_ADMIN),
    AdminClientRefreshWorkflowTasks => ScopeDef::tagged("AdminClientRefreshWorkflowTasks", ROLE_ADMIN),
    DCRedirectionDeprecateDomain => ScopeDef::tagged("DCRedirectionDeprecateDomain", ROLE_DC_REDIRECTION),
    DCRedirectionDescribeDomain => ScopeDef::tagged("DCRedirectionDescribeDomain", ROLE_DC_REDIRECTION),
    DCRedirectionDescribeTaskList => ScopeDef::tagged("DCRedirectionDescribeTaskList", ROLE_DC_REDIRECTION),
    DCRedirectionDescribeWorkflowExecution => ScopeDef::tagged("DCRedirectionDescribeWorkflowExecution", ROLE_DC_REDIRECTION),
    DCRedirectionGetWorkflowExecutionHistory => ScopeDef::tagged("DCRedirectionGetWorkflowExecutionHistory", ROLE_DC_REDIRECTION),
    DCRedirectionGetWorkflowExecutionRawHistory => ScopeDef::tagged("DCRedirectionGetWorkflowExecutionRawHistoryScope", ROLE_DC_REDIRECTION),
    DCRedirectionPollForWorkflowExecutionRawHistory => ScopeDef::tagged("DCRedirectionPollForWorkflowExecutionRawHistoryScope", ROLE_DC_REDIRECTION),
    DCRedirectionListArchivedWorkflowExecutions => ScopeDef::tagged("DCRedirectionListArchivedWorkflowExecutions", ROLE_DC_REDIRECTION),
    DCRedirectionListClosedWorkflowExecutions => ScopeDef::tagged("DCRedirectionListClosedWorkflowExecutions", ROLE_DC_REDIRECTION),
    DCRedirectionListDomains => ScopeDef::tagged("DCRedirectionListDomains", ROLE_DC_REDIRECTION),
    DCRedirectionListOpenWorkflowExecutions => ScopeDef::tagged("DCRedirectionListOpenWorkflowExecutions", ROLE_DC_REDIRECTION),
    DCRedirectionListWorkflowExecutions => ScopeDef::tagged("DCRedirectionListWorkflowExecutions", ROLE_DC_REDIRECTION),
    DCRedirectionScanWorkflowExecutions => ScopeDef::tagged("DCRedirectionScanWorkflowExecutions", ROLE_DC_REDIRECTION),
    DCRedirectionCountWorkflowExecutions => ScopeDef::tagged("DCRedirectionCountWorkflowExecutions", ROLE_DC_REDIRECTION),
    DCRedirectionGetSearchAttributes => ScopeDef::tagged("DCRedirectionGetSearchAttributes", ROLE_DC_REDIRECTION),
    DCRedirectionPollForActivityTask => ScopeDef::tagged("DCRedirectionPollForActivityTask", ROLE_DC_REDIRECTION),
    DCRedirectionPollForDecisionTask => ScopeDef::tagged("DCRedirectionPollForDecisionTask", ROLE_DC_REDIRECTION),
    DCRedirectionQueryWorkflow => ScopeDef::tagged("DCRedirectionQueryWorkflow", ROLE_DC_REDIRECTION),
    DCRedirectionRecordActivityTaskHeartbeat => ScopeDef::tagged("DCRedirectionRecordActivityTaskHeartbeat", ROLE_DC_REDIRECTION),
    DCRedirectionRecordActivityTaskHeartbeatByID => ScopeDef::tagged("DCRedirectionRecordActivityTaskHeartbeatByID", ROLE_DC_REDIRECTION),
    DCRedirectionRegisterDomain => ScopeDef::tagged("DCRedirectionRegisterDomain", ROLE_DC_REDIRECTION),
    DCRedirectionRequestCancelWorkflowExecution => ScopeDef::tagged("DCRedirectionRequestCancelWorkflowExecution", ROLE_DC_REDIRECTION),
    DCRedirectionResetStickyTaskList => ScopeDef::tagged("DCRedirectionResetStickyTaskList", ROLE_DC_REDIRECTION),
    DCRedirectionResetWorkflowExecution => ScopeDef::tagged("DCRedirectionResetWorkflowExecution", ROLE_DC_REDIRECTION),
    DCRedirectionRespondActivityTaskCanceled => ScopeDef::tagged("DCRedirectionRespondActivityTaskCanceled", ROLE_DC_REDIRECTION),
    DCRedirectionRespondActivityTaskCanceledByID => ScopeDef::tagged("DCRedirectionRespondActivityTaskCanceledByID", ROLE_DC_REDIRECTION),
    DCRedirectionRespondActivityTaskCompleted => ScopeDef::tagged("DCRedirectionRespondActivityTaskCompleted", ROLE_DC_REDIRECTION),
    DCRedirectionRespondActivityTaskCompletedByID => ScopeDef::tagged("DCRedirectionRespondActivityTaskCompletedByID", ROLE_DC_REDIRECTION),
    DCRedirectionRespondActivityTaskFailed => ScopeDef::tagged("DCRedirectionRespondActivityTaskFailed", ROLE_DC_REDIRECTION),
    DCRedirectionRespondActivityTaskFailedByID => ScopeDef::tagged("DCRedirectionRespondActivityTaskFailedByID", ROLE_DC_REDIRECTION),
    DCRedirectionRespondDecisionTaskCompleted => ScopeDef::tagged("DCRedirectionRespondDecisionTaskCompleted", ROLE_DC_REDIRECTION),
    DCRedirectionRespondDecisionTaskFailed => ScopeDef::tagged("DCRedirectionRespondDecisionTaskFailed", ROLE_DC_REDIRECTION),
    DCRedirectionRespondQueryTaskCompleted => ScopeDef::tagged("DCRedirectionRespondQueryTaskCompleted", ROLE_DC_REDIRECTION),
    DCRedirectionSignalWithStartWorkflowExecution => ScopeDef::tagged("DCRedirectionSignalWithStartWorkflowExecution", ROLE_DC_REDIRECTION),
    DCRedirectionSignalWorkflowExecution => ScopeDef::tagged("DCRedirectionSignalWorkflowExecution", ROLE_DC_REDIRECTION),
    DCRedirectionStartWorkflowExecution => ScopeDef::tagged("DCRedirectionStartWorkflowExecution", ROLE_DC_REDIRECTION),
    DCRedirectionTerminateWorkflowExecution => ScopeDef::tagged("DCRedirectionTerminateWorkflowExecution", ROLE_DC_REDIRECTION),
    DCRedirectionUpdateDomain => ScopeDef::tagged("DCRedirectionUpdateDomain", ROLE_DC_REDIRECTION),
    DCRedirectionListTaskListPartitions => ScopeDef::tagged("DCRedirectionListTaskListPartitions", ROLE_DC_REDIRECTION),
    MessagingClientPublish => ScopeDef::op("MessagingClientPublish"),
    MessagingClientPublishBatch => ScopeDef::op("MessagingClientPublishBatch"),
    DomainCache => ScopeDef::op("DomainCache"),
    HistoryRereplicationByTransferTask => ScopeDef::op("HistoryRereplicationByTransferTask"),
    HistoryRereplicationByTimerTask => ScopeDef::op("HistoryRereplicationByTimerTask"),
    HistoryRereplicationByHistoryReplication => ScopeDef::op("HistoryRereplicationByHistoryReplication"),
    HistoryRereplicationByHistoryMetadataReplication => ScopeDef::op("HistoryRereplicationByHistoryMetadataReplication"),
    HistoryRereplicationByActivityReplication => ScopeDef::op("HistoryRereplicationByActivityReplication"),
    PersistenceAppendHistoryNodes => ScopeDef::op("AppendHistoryNodes"),
    PersistenceReadHistoryBranch => ScopeDef::op("ReadHistoryBranch"),
    PersistenceForkHistoryBranch => ScopeDef::op("ForkHistoryBranch"),
    PersistenceDeleteHistoryBranch => ScopeDef::op("DeleteHistoryBranch"),
    PersistenceCompleteForkBranch => ScopeDef::op("CompleteForkBranch"),
    PersistenceGetHistoryTree => ScopeDef::op("GetHistoryTree"),
    PersistenceGetAllHistoryTreeBranches => ScopeDef::op("GetAllHistoryTreeBranches"),
    PersistenceDomainReplicationQueue => ScopeDef::op("DomainReplicationQueue"),
    ClusterMetadataArchivalConfig => ScopeDef::op("ArchivalConfig"),
    ElasticsearchRecordWorkflowExecutionStarted => ScopeDef::op("RecordWorkflowExecutionStarted"),
    ElasticsearchRecordWorkflowExecutionClosed => ScopeDef::op("RecordWorkflowExecutionClosed"),
    ElasticsearchUpsertWorkflowExecution => ScopeDef::op("UpsertWorkflowExecution"),
    ElasticsearchListOpenWorkflowExecutions => ScopeDef::op("ListOpenWorkflowExecutions"),
    ElasticsearchListClosedWorkflowExecutions => ScopeDef::op("ListClosedWorkflowExecutions"),
    ElasticsearchListOpenWorkflowExecutionsByType => ScopeDef::op("ListOpenWorkflowExecutionsByType"),
    ElasticsearchListClosedWorkflowExecutionsByType => ScopeDef::op("ListClosedWorkflowExecutionsByType"),
    ElasticsearchListOpenWorkflowExecutionsByWorkflowID => ScopeDef::op("ListOpenWorkflowExecutionsByWorkflowID"),
    ElasticsearchListClosedWorkflowExecutionsByWorkflowID => ScopeDef::op("ListClosedWorkflowExecutionsByWorkflowID"),
    ElasticsearchListClosedWorkflowExecutionsByStatus => ScopeDef::op("ListClosedWorkflowExecutionsByStatus"),
    ElasticsearchGetClosedWorkflowExecution => ScopeDef::op("GetClosedWorkflowExecution"),
    ElasticsearchListWorkflowExecutions => ScopeDef::op("ListWorkflowExecutions"),
    ElasticsearchScanWorkflowExecutions => ScopeDef::op("ScanWorkflowExecutions"),
    ElasticsearchCountWorkflowExecutions => ScopeDef::op("CountWorkflowExecutions"),
    ElasticsearchDeleteWorkflowExecutions => ScopeDef::op("DeleteWorkflowExecution"),
    SequentialTaskProcessing => ScopeDef::op("SequentialTaskProcessing"),
    ParallelTaskProcessing => ScopeDef::op("ParallelTaskProcessing"),
    TaskScheduler => ScopeDef::op("TaskScheduler"),
    HistoryArchiver => ScopeDef::op("HistoryArchiver"),
    VisibilityArchiver => ScopeDef::op("VisibilityArchiver"),
    BlobstoreClientUpload => ScopeDef::tagged("BlobstoreClientUpload", ROLE_BLOBSTORE),
    BlobstoreClientDownload => ScopeDef::tagged("BlobstoreClientDownload", ROLE_BLOBSTORE),
    BlobstoreClientGetMetadata => ScopeDef::tagged("BlobstoreClientGetMetadata", ROLE_BLOBSTORE),
    BlobstoreClientExists => ScopeDef::tagged("BlobstoreClientExists", ROLE_BLOBSTORE),
    BlobstoreClientDelete => ScopeDef::tagged("BlobstoreClientDelete", ROLE_BLOBSTORE),
    BlobstoreClientDirectoryExists => ScopeDef::tagged("BlobstoreClientDirectoryExists", ROLE_BLOBSTORE),
}

scope_block! {
    /// Frontend 服务私有区段；Admin 子区段折叠在最前，保持历史编号连续。
    pub enum FrontendScope, table FRONTEND_SCOPE_DEFS, count NUM_FRONTEND_SCOPES;
    AdminDescribeHistoryHost => ScopeDef::op("DescribeHistoryHost"),
    AdminAddSearchAttribute => ScopeDef::op("AddSearchAttribute"),
    AdminDescribeWorkflowExecution => ScopeDef::op("DescribeWorkflowExecution"),
    AdminGetWorkflowExecutionRawHistory => ScopeDef::op("GetWorkflowExecutionRawHistory"),
    AdminGetWorkflowExecutionRawHistoryV2 => ScopeDef::op("GetWorkflowExecutionRawHistoryV2"),
    AdminGetReplicationMessages => ScopeDef::op("GetReplicationMessages"),
    AdminGetDomainReplicationMessages => ScopeDef::op("GetDomainReplicationMessages"),
    AdminGetDLQReplicationMessages => ScopeDef::op("AdminGetDLQReplicationMessages"),
    AdminReapplyEvents => ScopeDef::op("ReapplyEvents"),
    AdminRefreshWorkflowTasks => ScopeDef::op("RefreshWorkflowTasks"),
    AdminRemoveTask => ScopeDef::op("AdminRemoveTask"),
    AdminCloseShardTask => ScopeDef::op("AdminCloseShardTask"),
    AdminReadDLQMessages => ScopeDef::op("AdminReadDLQMessages"),
    AdminPurgeDLQMessages => ScopeDef::op("AdminPurgeDLQMessages"),
    AdminMergeDLQMessages => ScopeDef::op("AdminMergeDLQMessages"),
    FrontendStartWorkflowExecution => ScopeDef::op("StartWorkflowExecution"),
    FrontendPollForDecisionTask => ScopeDef::op("PollForDecisionTask"),
    FrontendPollForActivityTask => ScopeDef::op("PollForActivityTask"),
    FrontendRecordActivityTaskHeartbeat => ScopeDef::op("RecordActivityTaskHeartbeat"),
    FrontendRecordActivityTaskHeartbeatByID => ScopeDef::op("RecordActivityTaskHeartbeatByID"),
    FrontendRespondDecisionTaskCompleted => ScopeDef::op("RespondDecisionTaskCompleted"),
    FrontendRespondDecisionTaskFailed => ScopeDef::op("RespondDecisionTaskFailed"),
    FrontendRespondQueryTaskCompleted => ScopeDef::op("RespondQueryTaskCompleted"),
    FrontendRespondActivityTaskCompleted => ScopeDef::op("RespondActivityTaskCompleted"),
    FrontendRespondActivityTaskFailed => ScopeDef::op("RespondActivityTaskFailed"),
    FrontendRespondActivityTaskCanceled => ScopeDef::op("RespondActivityTaskCanceled"),
    FrontendRespondActivityTaskCompletedByID => ScopeDef::op("RespondActivityTaskCompletedByID"),
    FrontendRespondActivityTaskFailedByID => ScopeDef::op("RespondActivityTaskFailedByID"),
    FrontendRespondActivityTaskCanceledByID => ScopeDef::op("RespondActivityTaskCanceledByID"),
    FrontendGetWorkflowExecutionHistory => ScopeDef::op("GetWorkflowExecutionHistory"),
    FrontendGetWorkflowExecutionRawHistory => ScopeDef::op("GetWorkflowExecutionRawHistory"),
    FrontendPollForWorkflowExecutionRawHistory => ScopeDef::op("PollForWorkflowExecutionRawHistory"),
    FrontendSignalWorkflowExecution => ScopeDef::op("SignalWorkflowExecution"),
    FrontendSignalWithStartWorkflowExecution => ScopeDef::op("SignalWithStartWorkflowExecution"),
    FrontendTerminateWorkflowExecution => ScopeDef::op("TerminateWorkflowExecution"),
    FrontendRequestCancelWorkflowExecution => ScopeDef::op("RequestCancelWorkflowExecution"),
    FrontendListArchivedWorkflowExecutions => ScopeDef::op("ListArchivedWorkflowExecutions"),
    FrontendListOpenWorkflowExecutions => ScopeDef::op("ListOpenWorkflowExecutions"),
    FrontendListClosedWorkflowExecutions => ScopeDef::op("ListClosedWorkflowExecutions"),
    FrontendListWorkflowExecutions => ScopeDef::op("ListWorkflowExecutions"),
    FrontendScanWorkflowExecutions => ScopeDef::op("ScanWorkflowExecutions"),
    FrontendCountWorkflowExecutions => ScopeDef::op("CountWorkflowExecutions"),
    FrontendRegisterDomain => ScopeDef::op("RegisterDomain"),
    FrontendDescribeDomain => ScopeDef::op("DescribeDomain"),
    FrontendUpdateDomain => ScopeDef::op("UpdateDomain"),
    FrontendDeprecateDomain => ScopeDef::op("DeprecateDomain"),
    FrontendQueryWorkflow => ScopeDef::op("QueryWorkflow"),
    FrontendDescribeWorkflowExecution => ScopeDef::op("DescribeWorkflowExecution"),
    FrontendDescribeTaskList => ScopeDef::op("DescribeTaskList"),
    FrontendListTaskListPartitions => ScopeDef::op("FrontendListTaskListPartitions"),
    FrontendResetStickyTaskList => ScopeDef::op("ResetStickyTaskList"),
    FrontendListDomains => ScopeDef::op("ListDomain"),
    FrontendResetWorkflowExecution => ScopeDef::op("ResetWorkflowExecution"),
    FrontendGetSearchAttributes => ScopeDef::op("GetSearchAttributes"),
}

scope_block! {
    /// History 服务私有区段。
    pub enum HistoryScope, table HISTORY_SCOPE_DEFS, count NUM_HISTORY_SCOPES;
    HistoryStartWorkflowExecution => ScopeDef::op("StartWorkflowExecution"),
    HistoryRecordActivityTaskHeartbeat => ScopeDef::op("RecordActivityTaskHeartbeat"),
    HistoryRespondDecisionTaskCompleted => ScopeDef::op("RespondDecisionTaskCompleted"),
    HistoryRespondDecisionTaskFailed => ScopeDef::op("RespondDecisionTaskFailed"),
    HistoryRespondActivityTaskCompleted => ScopeDef::op("RespondActivityTaskCompleted"),
    HistoryRespondActivityTaskFailed => ScopeDef::op("RespondActivityTaskFailed"),
    HistoryRespondActivityTaskCanceled => ScopeDef::op("RespondActivityTaskCanceled"),
    HistoryGetMutableState => ScopeDef::op("GetMutableState"),
    HistoryPollMutableState => ScopeDef::op("PollMutableState"),
    HistoryResetStickyTaskList => ScopeDef::op("ResetStickyTaskListScope"),
    HistoryDescribeWorkflowExecution => ScopeDef::op("DescribeWorkflowExecution"),
    HistoryRecordDecisionTaskStarted => ScopeDef::op("RecordDecisionTaskStarted"),
    HistoryRecordActivityTaskStarted => ScopeDef::op("RecordActivityTaskStarted"),
    HistorySignalWorkflowExecution => ScopeDef::op("SignalWorkflowExecution"),
    HistorySignalWithStartWorkflowExecution => ScopeDef::op("SignalWithStartWorkflowExecution"),
    HistoryRemoveSignalMutableState => ScopeDef::op("RemoveSignalMutableState"),
    HistoryTerminateWorkflowExecution => ScopeDef::op("TerminateWorkflowExecution"),
    HistoryScheduleDecisionTask => ScopeDef::op("ScheduleDecisionTask"),
    HistoryRecordChildExecutionCompleted => ScopeDef::op("RecordChildExecutionCompleted"),
    HistoryRequestCancelWorkflowExecution => ScopeDef::op("RequestCancelWorkflowExecution"),
    HistoryReplicateEvents => ScopeDef::op("ReplicateEvents"),
    HistoryReplicateRawEvents => ScopeDef::op("ReplicateRawEvents"),
    HistoryReplicateEventsV2 => ScopeDef::op("ReplicateEventsV2"),
    HistorySyncShardStatus => ScopeDef::op("SyncShardStatus"),
    HistorySyncActivity => ScopeDef::op("SyncActivity"),
    HistoryDescribeMutableState => ScopeDef::op("DescribeMutableState"),
    HistoryGetReplicationMessages => ScopeDef::op("GetReplicationMessages"),
    HistoryGetDLQReplicationMessages => ScopeDef::op("GetDLQReplicationMessages"),
    HistoryReadDLQMessages => ScopeDef::op("ReadDLQMessages"),
    HistoryPurgeDLQMessages => ScopeDef::op("PurgeDLQMessages"),
    HistoryMergeDLQMessages => ScopeDef::op("MergeDLQMessages"),
    HistoryShardController => ScopeDef::op("ShardController"),
    HistoryReapplyEvents => ScopeDef::op("EventReapplication"),
    HistoryRefreshWorkflowTasks => ScopeDef::op("RefreshWorkflowTasks"),
    TaskPriorityAssigner => ScopeDef::op("TaskPriorityAssigner"),
    TransferQueueProcessor => ScopeDef::op("TransferQueueProcessor"),
    TransferActiveQueueProcessor => ScopeDef::op("TransferActiveQueueProcessor"),
    TransferStandbyQueueProcessor => ScopeDef::op("TransferStandbyQueueProcessor"),
    TransferActiveTaskActivity => ScopeDef::op("TransferActiveTaskActivity"),
    TransferActiveTaskDecision => ScopeDef::op("TransferActiveTaskDecision"),
    TransferActiveTaskCloseExecution => ScopeDef::op("TransferActiveTaskCloseExecution"),
    TransferActiveTaskCancelExecution => ScopeDef::op("TransferActiveTaskCancelExecution"),
    TransferActiveTaskSignalExecution => ScopeDef::op("TransferActiveTaskSignalExecution"),
    TransferActiveTaskStartChildExecution => ScopeDef::op("TransferActiveTaskStartChildExecution"),
    TransferActiveTaskRecordWorkflowStarted => ScopeDef::op("TransferActiveTaskRecordWorkflowStarted"),
    TransferActiveTaskResetWorkflow => ScopeDef::op("TransferActiveTaskResetWorkflow"),
    TransferActiveTaskUpsertWorkflowSearchAttributes => ScopeDef::op("TransferActiveTaskUpsertWorkflowSearchAttributes"),
    TransferStandbyTaskResetWorkflow => ScopeDef::op("TransferStandbyTaskResetWorkflow"),
    TransferStandbyTaskActivity => ScopeDef::op("TransferStandbyTaskActivity"),
    TransferStandbyTaskDecision => ScopeDef::op("TransferStandbyTaskDecision"),
    TransferStandbyTaskCloseExecution => ScopeDef::op("TransferStandbyTaskCloseExecution"),
    TransferStandbyTaskCancelExecution => ScopeDef::op("TransferStandbyTaskCancelExecution"),
    TransferStandbyTaskSignalExecution => ScopeDef::op("TransferStandbyTaskSignalExecution"),
    TransferStandbyTaskStartChildExecution => ScopeDef::op("TransferStandbyTaskStartChildExecution"),
    TransferStandbyTaskRecordWorkflowStarted => ScopeDef::op("TransferStandbyTaskRecordWorkflowStarted"),
    TransferStandbyTaskUpsertWorkflowSearchAttributes => ScopeDef::op("TransferStandbyTaskUpsertWorkflowSearchAttributes"),
    TimerQueueProcessor => ScopeDef::op("TimerQueueProcessor"),
    TimerActiveQueueProcessor => ScopeDef::op("TimerActiveQueueProcessor"),
    TimerStandbyQueueProcessor => ScopeDef::op("TimerStandbyQueueProcessor"),
    TimerActiveTaskActivityTimeout => ScopeDef::op("TimerActiveTaskActivityTimeout"),
    TimerActiveTaskDecisionTimeout => ScopeDef::op("TimerActiveTaskDecisionTimeout"),
    TimerActiveTaskUserTimer => ScopeDef::op("TimerActiveTaskUserTimer"),
    TimerActiveTaskWorkflowTimeout => ScopeDef::op("TimerActiveTaskWorkflowTimeout"),
    TimerActiveTaskActivityRetryTimer => ScopeDef::op("TimerActiveTaskActivityRetryTimer"),
    TimerActiveTaskWorkflowBackoffTimer => ScopeDef::op("TimerActiveTaskWorkflowBackoffTimer"),
    TimerActiveTaskDeleteHistoryEvent => ScopeDef::op("TimerActiveTaskDeleteHistoryEvent"),
    TimerStandbyTaskActivityTimeout => ScopeDef::op("TimerStandbyTaskActivityTimeout"),
    TimerStandbyTaskDecisionTimeout => ScopeDef::op("TimerStandbyTaskDecisionTimeout"),
    TimerStandbyTaskUserTimer => ScopeDef::op("TimerStandbyTaskUserTimer"),
    TimerStandbyTaskWorkflowTimeout => ScopeDef::op("TimerStandbyTaskWorkflowTimeout"),
    TimerStandbyTaskActivityRetryTimer => ScopeDef::op("TimerStandbyTaskActivityRetryTimer"),
    TimerStandbyTaskDeleteHistoryEvent => ScopeDef::op("TimerStandbyTaskDeleteHistoryEvent"),
    TimerStandbyTaskWorkflowBackoffTimer => ScopeDef::op("TimerStandbyTaskWorkflowBackoffTimer"),
    HistoryEventNotification => ScopeDef::op("HistoryEventNotification"),
    ReplicatorQueueProcessor => ScopeDef::op("ReplicatorQueueProcessor"),
    ReplicatorTaskHistory => ScopeDef::op("ReplicatorTaskHistory"),
    ReplicatorTaskSyncActivity => ScopeDef::op("ReplicatorTaskSyncActivity"),
    ReplicateHistoryEvents => ScopeDef::op("ReplicateHistoryEvents"),
    ShardInfo => ScopeDef::op("ShardInfo"),
    WorkflowContext => ScopeDef::op("WorkflowContext"),
    HistoryCacheGetAndCreate => ScopeDef::tagged("HistoryCacheGetAndCreate", CACHE_MUTABLE_STATE),
    HistoryCacheGetOrCreate => ScopeDef::tagged("HistoryCacheGetOrCreate", CACHE_MUTABLE_STATE),
    HistoryCacheGetOrCreateCurrent => ScopeDef::tagged("HistoryCacheGetOrCreateCurrent", CACHE_MUTABLE_STATE),
    HistoryCacheGetCurrentExecution => ScopeDef::tagged("HistoryCacheGetCurrentExecution", CACHE_MUTABLE_STATE),
    EventsCacheGetEvent => ScopeDef::tagged("EventsCacheGetEvent", CACHE_EVENTS),
    EventsCachePutEvent => ScopeDef::tagged("EventsCachePutEvent", CACHE_EVENTS),
    EventsCacheDeleteEvent => ScopeDef::tagged("EventsCacheDeleteEvent", CACHE_EVENTS),
    EventsCacheGetFromStore => ScopeDef::tagged("EventsCacheGetFromStore", CACHE_EVENTS),
    ExecutionSizeStats => ScopeDef::tagged("ExecutionStats", STATS_SIZE),
    ExecutionCountStats => ScopeDef::tagged("ExecutionStats", STATS_COUNT),
    SessionSizeStats => ScopeDef::tagged("SessionStats", STATS_SIZE),
    SessionCountStats => ScopeDef::tagged("SessionStats", STATS_COUNT),
    HistoryResetWorkflowExecution => ScopeDef::op("ResetWorkflowExecution"),
    HistoryQueryWorkflow => ScopeDef::op("QueryWorkflow"),
    HistoryProcessDeleteHistoryEvent => ScopeDef::op("ProcessDeleteHistoryEvent"),
    WorkflowCompletionStats => ScopeDef::tagged("CompletionStats", STATS_COUNT),
    ArchiverClient => ScopeDef::op("ArchiverClient"),
    ReplicationTaskFetcher => ScopeDef::op("ReplicationTaskFetcher"),
    ReplicationTaskCleanup => ScopeDef::op("ReplicationTaskCleanup"),
    ReplicationDLQStats => ScopeDef::op("ReplicationDLQStats"),
}

scope_block! {
    /// Matching 服务私有区段。
    pub enum MatchingScope, table MATCHING_SCOPE_DEFS, count NUM_MATCHING_SCOPES;
    MatchingPollForDecisionTask => ScopeDef::op("PollForDecisionTask"),
    MatchingPollForActivityTask => ScopeDef::op("PollForActivityTask"),
    MatchingAddActivityTask => ScopeDef::op("AddActivityTask"),
    MatchingAddDecisionTask => ScopeDef::op("AddDecisionTask"),
    MatchingTaskListMgr => ScopeDef::op("TaskListMgr"),
    MatchingQueryWorkflow => ScopeDef::op("QueryWorkflow"),
    MatchingRespondQueryTaskCompleted => ScopeDef::op("RespondQueryTaskCompleted"),
    MatchingCancelOutstandingPoll => ScopeDef::op("CancelOutstandingPoll"),
    MatchingDescribeTaskList => ScopeDef::op("DescribeTaskList"),
    MatchingListTaskListPartitions => ScopeDef::op("ListTaskListPartitions"),
}

scope_block! {
    /// Worker 服务私有区段。
    pub enum WorkerScope, table WORKER_SCOPE_DEFS, count NUM_WORKER_SCOPES;
    Replicator => ScopeDef::op("Replicator"),
    DomainReplicationTask => ScopeDef::op("DomainReplicationTask"),
    HistoryReplicationTask => ScopeDef::op("HistoryReplicationTask"),
    HistoryMetadataReplicationTask => ScopeDef::op("HistoryMetadataReplicationTask"),
    HistoryReplicationV2Task => ScopeDef::op("HistoryReplicationV2Task"),
    SyncShardTask => ScopeDef::op("SyncShardTask"),
    SyncActivityTask => ScopeDef::op("SyncActivityTask"),
    ESProcessor => ScopeDef::op("ESProcessor"),
    IndexProcessor => ScopeDef::op("IndexProcessor"),
    ArchiverDeleteHistoryActivity => ScopeDef::op("ArchiverDeleteHistoryActivity"),
    ArchiverUploadHistoryActivity => ScopeDef::op("ArchiverUploadHistoryActivity"),
    ArchiverArchiveVisibilityActivity => ScopeDef::op("ArchiverArchiveVisibilityActivity"),
    Archiver => ScopeDef::op("Archiver"),
    ArchiverPump => ScopeDef::op("ArchiverPump"),
    ArchiverArchivalWorkflow => ScopeDef::op("ArchiverArchivalWorkflow"),
    TaskListScavenger => ScopeDef::op("tasklistscavenger"),
    ExecutionsScavenger => ScopeDef::op("executionsscavenger"),
    Batcher => ScopeDef::op("batcher"),
    HistoryScavenger => ScopeDef::op("historyscavenger"),
    ParentClosePolicyProcessor => ScopeDef::op("ParentClosePolicyProcessor"),
}
